//! The shipped country format table.
//!
//! Keys are ISO 3166-1 alpha-2 codes plus a few non-standard extensions
//! (`AC` Ascension, `TA` Tristan da Cunha, `IC` Canary Islands, `XK`/`KO` Kosovo).
//! An empty list means the country has no standardized postal code format and
//! any string is accepted.
//!
//! Entries are kept sorted by key; `table::tests` enforces that.

pub(crate) static BUILTIN_FORMATS: &[(&str, &[&str])] = &[
    ("AC", &[]),                                        // Ascension
    ("AD", &["AD###", "#####"]),                        // Andorra
    ("AE", &[]),                                        // United Arab Emirates
    ("AF", &["####"]),                                  // Afghanistan
    ("AG", &[]),                                        // Antigua and Barbuda
    ("AI", &["AI-2640"]),                               // Anguilla
    ("AL", &["####"]),                                  // Albania
    ("AM", &["####"]),                                  // Armenia
    ("AN", &[]),                                        // Netherlands Antilles
    ("AO", &[]),                                        // Angola
    ("AQ", &["BIQQ 1ZZ"]),                              // Antarctica
    ("AR", &["####", "@####@@@"]),                      // Argentina
    ("AS", &["#####", "#####-####"]),                   // American Samoa
    ("AT", &["####"]),                                  // Austria
    ("AU", &["####"]),                                  // Australia
    ("AW", &[]),                                        // Aruba
    ("AX", &["#####", "AX-#####"]),                     // Åland
    ("AZ", &["AZ ####"]),                               // Azerbaijan

    ("BA", &["#####"]),                                 // Bosnia and Herzegowina
    ("BB", &["BB#####"]),                               // Barbados
    ("BD", &["####"]),                                  // Bangladesh
    ("BE", &["####"]),                                  // Belgium
    ("BF", &[]),                                        // Burkina Faso
    ("BG", &["####"]),                                  // Bulgaria
    ("BH", &["###", "####"]),                           // Bahrain
    ("BI", &[]),                                        // Burundi
    ("BJ", &[]),                                        // Benin
    ("BL", &["#####"]),                                 // Sankt Bartholomäus
    ("BM", &["@@ ##", "@@ @@"]),                        // Bermuda
    ("BN", &["@@####"]),                                // Brunei Darussalam
    ("BO", &[]),                                        // Bolivia
    ("BQ", &[]),                                        // Bonaire, Saint Eustatius, Saba
    ("BR", &["#####-###", "#####"]),                    // Brazil
    ("BS", &[]),                                        // Bahamas
    ("BT", &["#####"]),                                 // Bhutan
    ("BV", &[]),                                        // Bouvet Island
    ("BW", &[]),                                        // Botswana
    ("BY", &["######"]),                                // Belarus
    ("BZ", &[]),                                        // Belize

    ("CA", &["@#@ #@#"]),                               // Canada
    ("CC", &["####"]),                                  // Cocos (Keeling) Islands
    ("CD", &[]),                                        // Congo, Democratic Republic of (Was Zaire)
    ("CF", &[]),                                        // Central African Republic
    ("CG", &[]),                                        // Congo, People's Republic of
    ("CH", &["####"]),                                  // Switzerland
    ("CI", &[]),                                        // Cote D'ivoire
    ("CK", &[]),                                        // Cook Islands
    ("CL", &["#######", "###-####"]),                   // Chile
    ("CM", &[]),                                        // Cameroon
    ("CN", &["######"]),                                // China
    ("CO", &["######"]),                                // Colombia
    ("CR", &["#####", "#####-####"]),                   // Costa Rica
    ("CU", &["#####"]),                                 // Cuba
    ("CV", &["####"]),                                  // Cape Verde
    ("CW", &[]),                                        // Curacao
    ("CX", &["####"]),                                  // Christmas Island
    ("CY", &["####"]),                                  // Cyprus
    ("CZ", &["### ##"]),                                // Czech Republics

    ("DE", &["#####"]),                                 // Germany
    ("DJ", &[]),                                        // Djibouti
    ("DK", &["####"]),                                  // Denmark
    ("DM", &[]),                                        // Dominica
    ("DO", &["#####"]),                                 // Dominican Republic
    ("DZ", &["#####"]),                                 // Algeria

    ("EC", &["######"]),                                // Ecuador
    ("EE", &["#####"]),                                 // Estonia
    ("EG", &["#####"]),                                 // Egypt
    ("EH", &[]),                                        // Western Sahara
    ("ER", &[]),                                        // Eritrea
    ("ES", &["#####"]),                                 // Spain
    ("ET", &["####"]),                                  // Ethiopia

    ("FI", &["#####"]),                                 // Finland
    ("FJ", &[]),                                        // Fiji
    ("FK", &["FIQQ 1ZZ"]),                              // Falkland Islands (Malvinas)
    ("FM", &["#####", "#####-####"]),                   // Micronesia
    ("FO", &["###", "FO-###"]),                         // Faroe Islands
    ("FR", &["#####"]),                                 // France
    ("FX", &[]),                                        // France, Metropolitan

    ("GA", &[]),                                        // Gabon
    // Great Britain
    (
        "GB",
        &["@@## #@@", "@#@ #@@", "@@# #@@", "@@#@ #@@", "@## #@@", "@# #@@"],
    ),
    ("GD", &[]),                                        // Grenada
    ("GE", &["####"]),                                  // Georgia
    ("GF", &["973##"]),                                 // French Guiana
    ("GG", &["GY# #@@", "GY## #@@"]),                   // Guernsey
    ("GH", &[]),                                        // Ghana
    ("GI", &["GX11 1AA"]),                              // Gibraltar
    ("GL", &["####"]),                                  // Greenland
    ("GM", &[]),                                        // Gambia
    ("GN", &["###"]),                                   // Guinea
    ("GP", &["971##"]),                                 // Guadeloupe
    ("GQ", &[]),                                        // Equatorial Guinea
    ("GR", &["### ##"]),                                // Greece
    ("GS", &["SIQQ 1ZZ"]),                              // South Georgia and the South Sandwich Islands
    ("GT", &["#####"]),                                 // Guatemala
    ("GU", &["#####", "#####-####"]),                   // Guam
    ("GW", &["####"]),                                  // Guinea-Bissau
    ("GY", &[]),                                        // Guyana

    ("HK", &[]),                                        // Hong Kong
    ("HM", &[]),                                        // Heard and Mc Donald Islands
    ("HN", &["@@####", "#####"]),                       // Honduras
    ("HR", &["#####"]),                                 // Croatia
    ("HT", &["####"]),                                  // Haiti
    ("HU", &["####"]),                                  // Hungary

    ("IC", &["#####"]),                                 // The Canary Islands
    ("ID", &["#####"]),                                 // Indonesia
    ("IE", &["@#* ****"]),                              // Ireland
    ("IL", &["#######"]),                               // Israel
    ("IM", &["IM# #@@", "IM## #@@"]),                   // Isle of Man
    ("IN", &["######", "### ###"]),                     // India
    ("IO", &["BBND 1ZZ"]),                              // British Indian Ocean Territory
    ("IQ", &["#####"]),                                 // Iraq
    ("IR", &["##########", "#####-#####"]),             // Iran
    ("IS", &["###"]),                                   // Iceland
    ("IT", &["#####"]),                                 // Italy

    ("JE", &["JE# #@@", "JE## #@@"]),                   // Jersey
    ("JM", &["##"]),                                    // Jamaica
    ("JO", &["#####"]),                                 // Jordan
    ("JP", &["###-####", "###"]),                       // Japan

    ("KE", &["#####"]),                                 // Kenya
    ("KG", &["######"]),                                // Kyrgyzstan
    ("KH", &["#####", "######"]),                       // Cambodia
    ("KI", &[]),                                        // Kiribati
    ("KM", &[]),                                        // Comoros
    ("KN", &[]),                                        // Saint Kitts and Nevis
    ("KO", &[]),                                        // Kosovo
    ("KP", &[]),                                        // North Korea
    ("KR", &["###-###", "#####"]),                      // South Korea
    ("KW", &["#####"]),                                 // Kuwait
    ("KY", &["KY#-####"]),                              // Cayman Islands
    ("KZ", &["######"]),                                // Kazakhstan

    ("LA", &["#####"]),                                 // Lao People's Democratic Republic
    ("LB", &["#####", "#### ####"]),                    // Lebanon
    ("LC", &["LC## ###"]),                              // Saint Lucia
    ("LI", &["####"]),                                  // Liechtenstein
    ("LK", &["#####"]),                                 // Sri Lanka
    ("LR", &["####"]),                                  // Liberia
    ("LS", &["###"]),                                   // Lesotho
    ("LT", &["LT-#####", "#####"]),                     // Lithuania
    ("LU", &["L-####", "####"]),                        // Luxembourg
    ("LV", &["LV-####"]),                               // Latvia
    ("LY", &[]),                                        // Libyan Arab Jamahiriya

    ("MA", &["#####"]),                                 // Morocco
    ("MC", &["980##"]),                                 // Monaco
    ("MD", &["MD####", "MD-####"]),                     // Moldova
    ("ME", &["#####"]),                                 // Montenegro
    ("MF", &["97150"]),                                 // Saint-Martin
    ("MG", &["###"]),                                   // Madagascar
    ("MH", &["#####", "#####-####"]),                   // Marshall Islands
    ("MK", &["####"]),                                  // Macedonia
    ("ML", &[]),                                        // Mali
    ("MM", &["#####"]),                                 // Myanmar
    ("MN", &["#####"]),                                 // Mongolia
    ("MO", &[]),                                        // Macau
    ("MP", &["#####", "#####-####"]),                   // Saipan, Northern Mariana Islands
    ("MQ", &["972##"]),                                 // Martinique
    ("MR", &[]),                                        // Mauritania
    ("MS", &[]),                                        // Montserrat
    ("MT", &["@@@ ####"]),                              // Malta
    ("MU", &["#####"]),                                 // Mauritius
    ("MV", &["#####"]),                                 // Maldives
    ("MW", &[]),                                        // Malawi
    ("MX", &["#####"]),                                 // Mexico
    ("MY", &["#####"]),                                 // Malaysia
    ("MZ", &["####"]),                                  // Mozambique

    ("NA", &[]),                                        // Namibia
    ("NC", &["988##"]),                                 // New Caledonia
    ("NE", &["####"]),                                  // Niger
    ("NF", &["####"]),                                  // Norfolk Island
    ("NG", &["######"]),                                // Nigeria
    ("NI", &["#####"]),                                 // Nicaragua
    ("NL", &["####@@", "#### @@"]),                     // Netherlands
    ("NO", &["####"]),                                  // Norway
    ("NP", &["#####"]),                                 // Nepal
    ("NR", &[]),                                        // Nauru
    ("NU", &[]),                                        // Niue
    ("NZ", &["####"]),                                  // New Zealand

    ("OM", &["###"]),                                   // Oman

    ("PA", &["####"]),                                  // Panama
    ("PE", &["#####", "PE #####"]),                     // Peru
    ("PF", &["987##"]),                                 // French Polynesia
    ("PG", &["###"]),                                   // Papua New Guinea
    ("PH", &["####"]),                                  // Philippines
    ("PK", &["#####"]),                                 // Pakistan
    ("PL", &["##-###"]),                                // Poland
    ("PM", &["97500"]),                                 // St. Pierre and Miquelon
    ("PN", &["PCRN 1ZZ"]),                              // Pitcairn
    ("PR", &["#####", "#####-####"]),                   // Puerto Rico
    ("PS", &["###"]),                                   // Palestinian Territory
    ("PT", &["####-###"]),                              // Portugal
    ("PW", &["#####", "#####-####"]),                   // Palau
    ("PY", &["####"]),                                  // Paraguay

    ("QA", &[]),                                        // Qatar

    ("RE", &["974##"]),                                 // Reunion
    ("RO", &["######"]),                                // Romania
    ("RS", &["#####"]),                                 // Serbia
    ("RU", &["######"]),                                // Russia
    ("RW", &[]),                                        // Rwanda

    ("SA", &["#####", "#####-####"]),                   // Saudi Arabia
    ("SB", &[]),                                        // Solomon Islands
    ("SC", &[]),                                        // Seychelles
    ("SD", &["#####"]),                                 // Sudan
    ("SE", &["### ##"]),                                // Sweden
    ("SG", &["######"]),                                // Singapore
    ("SH", &["@@@@ 1ZZ"]),                              // St. Helena
    ("SI", &["####", "SI-####"]),                       // Slovenia
    ("SJ", &["####"]),                                  // Svalbard and Jan Mayen Islands
    ("SK", &["### ##"]),                                // Slovakia
    ("SL", &[]),                                        // Sierra Leone
    ("SM", &["4789#"]),                                 // San Marino
    ("SN", &["#####"]),                                 // Senegal
    ("SO", &["@@ #####"]),                              // Somalia
    ("SR", &[]),                                        // Suriname
    ("SS", &["#####"]),                                 // South Sudan
    ("ST", &[]),                                        // Sao Tome and Principe
    ("SV", &["####"]),                                  // El Salvador
    ("SX", &[]),                                        // Sint Maarten
    ("SY", &[]),                                        // Syrian Arab Republic
    ("SZ", &["@###"]),                                  // Swaziland

    ("TA", &[]),                                        // Tristan da Cunha
    ("TC", &["TKCA 1ZZ"]),                              // Turks and Caicos Islands
    ("TD", &[]),                                        // Chad
    ("TF", &[]),                                        // French Southern Territories
    ("TG", &[]),                                        // Togo
    ("TH", &["#####"]),                                 // Thailand
    ("TJ", &["######"]),                                // Tajikistan
    ("TK", &[]),                                        // Tokelau
    ("TL", &[]),                                        // East Timor
    ("TM", &["######"]),                                // Turkmenistan
    ("TN", &["####"]),                                  // Tunisia
    ("TO", &[]),                                        // Tonga
    ("TR", &["#####"]),                                 // Turkey
    ("TT", &["######"]),                                // Trinidad and Tobago
    ("TV", &[]),                                        // Tuvalu
    ("TW", &["###", "###-##"]),                         // Taiwan
    ("TZ", &["#####"]),                                 // Tanzania

    ("UA", &["#####"]),                                 // Ukraine
    ("UG", &[]),                                        // Uganda
    ("UM", &[]),                                        // United States Minor Outlying Islands
    ("US", &["#####", "#####-####"]),                   // Usa
    ("UY", &["#####"]),                                 // Uruguay
    ("UZ", &["######"]),                                // Usbekistan

    ("VA", &["00120"]),                                 // Vatican City State
    ("VC", &["VC####"]),                                // Saint Vincent and the Grenadines
    ("VE", &["####", "####-@"]),                        // Venezuela
    ("VG", &["VG####"]),                                // Virgin Islands (British)
    ("VI", &["#####", "#####-####"]),                   // Virgin Islands (U.s.)
    ("VN", &["######"]),                                // Vietnam
    ("VU", &[]),                                        // Vanuatu

    ("WF", &["986##"]),                                 // Wallis and Futuna Islands
    ("WS", &["WS####"]),                                // Samoa

    ("XK", &["#####"]),                                 // Kosovo

    ("YE", &[]),                                        // Yemen
    ("YT", &["976##"]),                                 // Mayotte

    ("ZA", &["####"]),                                  // South Africa
    ("ZM", &["#####"]),                                 // Zambia
    ("ZW", &[]),                                        // Zimbabwe
];
