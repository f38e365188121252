//! Static table of fetch targets.
//!
//! Country codes are FIPS 10-4, which is what the GDELT `sourcecountry`
//! filter expects (not ISO 3166; e.g. Germany is `GM`, Spain is `SP`).

/// A country to fetch headlines for. Defined once at startup, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryTarget {
    /// Display name used in output files and logs.
    pub name: &'static str,
    /// FIPS 10-4 source-country code sent to the API.
    pub code: &'static str,
}

/// Every country the pipeline attempts, in display-name order.
pub const COUNTRIES: &[CountryTarget] = &[
    CountryTarget { name: "Afghanistan", code: "AF" },
    CountryTarget { name: "Albania", code: "AL" },
    CountryTarget { name: "Algeria", code: "AG" },
    CountryTarget { name: "Andorra", code: "AN" },
    CountryTarget { name: "Angola", code: "AO" },
    CountryTarget { name: "Antigua and Barbuda", code: "AC" },
    CountryTarget { name: "Argentina", code: "AR" },
    CountryTarget { name: "Armenia", code: "AM" },
    CountryTarget { name: "Australia", code: "AS" },
    CountryTarget { name: "Austria", code: "AU" },
    CountryTarget { name: "Azerbaijan", code: "AJ" },
    CountryTarget { name: "Bahamas", code: "BF" },
    CountryTarget { name: "Bahrain", code: "BA" },
    CountryTarget { name: "Bangladesh", code: "BG" },
    CountryTarget { name: "Barbados", code: "BB" },
    CountryTarget { name: "Belarus", code: "BO" },
    CountryTarget { name: "Belgium", code: "BE" },
    CountryTarget { name: "Belize", code: "BH" },
    CountryTarget { name: "Benin", code: "BN" },
    CountryTarget { name: "Bolivia", code: "BL" },
    CountryTarget { name: "Bosnia and Herzegovina", code: "BK" },
    CountryTarget { name: "Botswana", code: "BC" },
    CountryTarget { name: "Brazil", code: "BR" },
    CountryTarget { name: "Brunei", code: "BX" },
    CountryTarget { name: "Bulgaria", code: "BU" },
    CountryTarget { name: "Burkina Faso", code: "UV" },
    CountryTarget { name: "Burundi", code: "BY" },
    CountryTarget { name: "Cambodia", code: "CB" },
    CountryTarget { name: "Cameroon", code: "CM" },
    CountryTarget { name: "Canada", code: "CA" },
    CountryTarget { name: "Cabo Verde", code: "CV" },
    CountryTarget { name: "Central African Republic", code: "CT" },
    CountryTarget { name: "Chad", code: "CD" },
    CountryTarget { name: "Chile", code: "CI" },
    CountryTarget { name: "China", code: "CH" },
    CountryTarget { name: "Colombia", code: "CO" },
    CountryTarget { name: "Comoros", code: "CN" },
    CountryTarget { name: "Democratic Republic of the Congo", code: "CG" },
    CountryTarget { name: "Republic of the Congo", code: "CF" },
    CountryTarget { name: "Costa Rica", code: "CS" },
    CountryTarget { name: "Cote d'Ivoire", code: "IV" },
    CountryTarget { name: "Croatia", code: "HR" },
    CountryTarget { name: "Cuba", code: "CU" },
    CountryTarget { name: "Cyprus", code: "CY" },
    CountryTarget { name: "Czechia", code: "EZ" },
    CountryTarget { name: "Denmark", code: "DA" },
    CountryTarget { name: "Djibouti", code: "DJ" },
    CountryTarget { name: "Dominica", code: "DO" },
    CountryTarget { name: "Dominican Republic", code: "DR" },
    CountryTarget { name: "Ecuador", code: "EC" },
    CountryTarget { name: "Egypt", code: "EG" },
    CountryTarget { name: "El Salvador", code: "ES" },
    CountryTarget { name: "Equatorial Guinea", code: "EK" },
    CountryTarget { name: "Eritrea", code: "ER" },
    CountryTarget { name: "Estonia", code: "EN" },
    CountryTarget { name: "Eswatini", code: "WZ" },
    CountryTarget { name: "Ethiopia", code: "ET" },
    CountryTarget { name: "Fiji", code: "FJ" },
    CountryTarget { name: "Finland", code: "FI" },
    CountryTarget { name: "France", code: "FR" },
    CountryTarget { name: "Gabon", code: "GB" },
    CountryTarget { name: "Gambia", code: "GA" },
    CountryTarget { name: "Georgia", code: "GG" },
    CountryTarget { name: "Germany", code: "GM" },
    CountryTarget { name: "Ghana", code: "GH" },
    CountryTarget { name: "Greece", code: "GR" },
    CountryTarget { name: "Grenada", code: "GJ" },
    CountryTarget { name: "Guatemala", code: "GT" },
    CountryTarget { name: "Guinea", code: "GV" },
    CountryTarget { name: "Guinea-Bissau", code: "PU" },
    CountryTarget { name: "Guyana", code: "GY" },
    CountryTarget { name: "Haiti", code: "HA" },
    CountryTarget { name: "Honduras", code: "HO" },
    CountryTarget { name: "Hungary", code: "HU" },
    CountryTarget { name: "Iceland", code: "IC" },
    CountryTarget { name: "India", code: "IN" },
    CountryTarget { name: "Indonesia", code: "ID" },
    CountryTarget { name: "Iran", code: "IR" },
    CountryTarget { name: "Iraq", code: "IZ" },
    CountryTarget { name: "Ireland", code: "EI" },
    CountryTarget { name: "Israel", code: "IS" },
    CountryTarget { name: "Italy", code: "IT" },
    CountryTarget { name: "Jamaica", code: "JM" },
    CountryTarget { name: "Japan", code: "JA" },
    CountryTarget { name: "Jordan", code: "JO" },
    CountryTarget { name: "Kazakhstan", code: "KZ" },
    CountryTarget { name: "Kenya", code: "KE" },
    CountryTarget { name: "Kiribati", code: "KR" },
    CountryTarget { name: "North Korea", code: "KN" },
    CountryTarget { name: "South Korea", code: "KS" },
    CountryTarget { name: "Kosovo", code: "KV" },
    CountryTarget { name: "Kuwait", code: "KU" },
    CountryTarget { name: "Kyrgyzstan", code: "KG" },
    CountryTarget { name: "Laos", code: "LA" },
    CountryTarget { name: "Latvia", code: "LG" },
    CountryTarget { name: "Lebanon", code: "LE" },
    CountryTarget { name: "Lesotho", code: "LT" },
    CountryTarget { name: "Liberia", code: "LI" },
    CountryTarget { name: "Libya", code: "LY" },
    CountryTarget { name: "Liechtenstein", code: "LS" },
    CountryTarget { name: "Lithuania", code: "LH" },
    CountryTarget { name: "Luxembourg", code: "LU" },
    CountryTarget { name: "Madagascar", code: "MA" },
    CountryTarget { name: "Malawi", code: "MI" },
    CountryTarget { name: "Malaysia", code: "MY" },
    CountryTarget { name: "Maldives", code: "MV" },
    CountryTarget { name: "Mali", code: "ML" },
    CountryTarget { name: "Malta", code: "MT" },
    CountryTarget { name: "Marshall Islands", code: "RM" },
    CountryTarget { name: "Mauritania", code: "MR" },
    CountryTarget { name: "Mauritius", code: "MP" },
    CountryTarget { name: "Mexico", code: "MX" },
    CountryTarget { name: "Micronesia", code: "FM" },
    CountryTarget { name: "Moldova", code: "MD" },
    CountryTarget { name: "Monaco", code: "MN" },
    CountryTarget { name: "Mongolia", code: "MG" },
    CountryTarget { name: "Montenegro", code: "MJ" },
    CountryTarget { name: "Morocco", code: "MO" },
    CountryTarget { name: "Mozambique", code: "MZ" },
    CountryTarget { name: "Myanmar", code: "BM" },
    CountryTarget { name: "Namibia", code: "WA" },
    CountryTarget { name: "Nauru", code: "NR" },
    CountryTarget { name: "Nepal", code: "NP" },
    CountryTarget { name: "Netherlands", code: "NL" },
    CountryTarget { name: "New Zealand", code: "NZ" },
    CountryTarget { name: "Nicaragua", code: "NU" },
    CountryTarget { name: "Niger", code: "NG" },
    CountryTarget { name: "Nigeria", code: "NI" },
    CountryTarget { name: "North Macedonia", code: "MK" },
    CountryTarget { name: "Norway", code: "NO" },
    CountryTarget { name: "Oman", code: "MU" },
    CountryTarget { name: "Pakistan", code: "PK" },
    CountryTarget { name: "Palau", code: "PS" },
    CountryTarget { name: "Panama", code: "PM" },
    CountryTarget { name: "Papua New Guinea", code: "PP" },
    CountryTarget { name: "Paraguay", code: "PA" },
    CountryTarget { name: "Peru", code: "PE" },
    CountryTarget { name: "Philippines", code: "RP" },
    CountryTarget { name: "Poland", code: "PL" },
    CountryTarget { name: "Portugal", code: "PO" },
    CountryTarget { name: "Qatar", code: "QA" },
    CountryTarget { name: "Romania", code: "RO" },
    CountryTarget { name: "Russia", code: "RS" },
    CountryTarget { name: "Rwanda", code: "RW" },
    CountryTarget { name: "Saint Kitts and Nevis", code: "SC" },
    CountryTarget { name: "Saint Lucia", code: "ST" },
    CountryTarget { name: "Saint Vincent and the Grenadines", code: "VC" },
    CountryTarget { name: "Samoa", code: "WS" },
    CountryTarget { name: "San Marino", code: "SM" },
    CountryTarget { name: "Sao Tome and Principe", code: "TP" },
    CountryTarget { name: "Saudi Arabia", code: "SA" },
    CountryTarget { name: "Senegal", code: "SG" },
    CountryTarget { name: "Serbia", code: "RI" },
    CountryTarget { name: "Seychelles", code: "SE" },
    CountryTarget { name: "Sierra Leone", code: "SL" },
    CountryTarget { name: "Singapore", code: "SN" },
    CountryTarget { name: "Slovakia", code: "LO" },
    CountryTarget { name: "Slovenia", code: "SI" },
    CountryTarget { name: "Solomon Islands", code: "BP" },
    CountryTarget { name: "Somalia", code: "SO" },
    CountryTarget { name: "South Africa", code: "SF" },
    CountryTarget { name: "South Sudan", code: "OD" },
    CountryTarget { name: "Spain", code: "SP" },
    CountryTarget { name: "Sri Lanka", code: "CE" },
    CountryTarget { name: "Sudan", code: "SU" },
    CountryTarget { name: "Suriname", code: "NS" },
    CountryTarget { name: "Sweden", code: "SW" },
    CountryTarget { name: "Switzerland", code: "SZ" },
    CountryTarget { name: "Syria", code: "SY" },
    CountryTarget { name: "Tajikistan", code: "TI" },
    CountryTarget { name: "Tanzania", code: "TZ" },
    CountryTarget { name: "Thailand", code: "TH" },
    CountryTarget { name: "Timor-Leste", code: "TT" },
    CountryTarget { name: "Togo", code: "TO" },
    CountryTarget { name: "Tonga", code: "TN" },
    CountryTarget { name: "Trinidad and Tobago", code: "TD" },
    CountryTarget { name: "Tunisia", code: "TS" },
    CountryTarget { name: "Turkey", code: "TU" },
    CountryTarget { name: "Turkmenistan", code: "TX" },
    CountryTarget { name: "Tuvalu", code: "TV" },
    CountryTarget { name: "Uganda", code: "UG" },
    CountryTarget { name: "Ukraine", code: "UP" },
    CountryTarget { name: "United Arab Emirates", code: "AE" },
    CountryTarget { name: "United Kingdom", code: "UK" },
    CountryTarget { name: "United States", code: "US" },
    CountryTarget { name: "Uruguay", code: "UY" },
    CountryTarget { name: "Uzbekistan", code: "UZ" },
    CountryTarget { name: "Vanuatu", code: "NH" },
    CountryTarget { name: "Venezuela", code: "VE" },
    CountryTarget { name: "Vietnam", code: "VM" },
    CountryTarget { name: "Yemen", code: "YM" },
    CountryTarget { name: "Zambia", code: "ZA" },
    CountryTarget { name: "Zimbabwe", code: "ZI" },
];
