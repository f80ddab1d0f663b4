/// A country with its ISO 3166-1 alpha-2 code, the names it goes by in
/// company names, and the legal-form terms registered there.
#[derive(Debug)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    /// Lowercase names used as trailing qualifiers: "EV Finland Oy"
    pub names: &'static [&'static str],
    pub terms: &'static [&'static str],
}

/// Terms grouped by the kind of legal entity they denote, independent of
/// jurisdiction. Only consulted when no country is given.
pub const TERMS_BY_TYPE: &[(&str, &[&str])] = &[
    ("Company", &["co", "company", "& co", "and company"]),
    ("Cooperative", &["co-op", "coop", "cooperative", "cooperativa", "genossenschaft"]),
    ("Corporation", &["corp", "corporation", "inc", "incorporated"]),
    ("Limited", &["limited", "ltd"]),
    ("Limited Liability Company", &["llc", "l.l.c.", "gmbh", "sarl", "srl", "bvba", "ooo"]),
    ("Limited Liability Partnership", &["llp", "l.l.p."]),
    ("Limited Partnership", &["lp", "l.p.", "kg", "kommanditgesellschaft", "sca"]),
    ("Non-Profit", &["ry", "rf", "r.y.", "r.f.", "e.v.", "vzw", "nonprofit", "non-profit"]),
    ("Partnership", &["gp", "ohg", "snc", "v.o.f.", "ans", "hb", "ay"]),
    ("Professional Corporation", &["pc", "p.c.", "pllc", "prof corp"]),
    ("Public Limited Company", &["plc", "p.l.c.", "ag", "s.a.", "n.v.", "asa", "oyj", "abp", "s.p.a."]),
    ("Sole Proprietorship", &["sole proprietorship", "tmi", "e.k.", "enk"]),
];

/// Terms recognized whatever the country of registration.
pub const GLOBAL_TERMS: &[&str] = &[
    "ab", "ag", "as", "b.v.", "bv", "co", "corp", "corporation", "gmbh", "inc", "incorporated",
    "limited", "llc", "ltd", "n.v.", "nv", "oy", "plc", "publ", "s.a.", "sa", "sarl", "s.e.",
];

pub const COUNTRIES: &[Country] = &[
    Country {
        code: "AT",
        name: "Austria",
        names: &["austria", "österreich"],
        terms: &["ag", "gesmbh", "gmbh", "kg", "og", "e.u."],
    },
    Country {
        code: "AU",
        name: "Australia",
        names: &["australia"],
        terms: &["pty", "pty ltd", "pty. ltd.", "proprietary limited", "nl"],
    },
    Country {
        code: "BE",
        name: "Belgium",
        names: &["belgium", "belgique", "belgië"],
        terms: &["bvba", "cvba", "nv", "sprl", "vzw", "asbl"],
    },
    Country {
        code: "BR",
        name: "Brazil",
        names: &["brazil", "brasil"],
        terms: &["ltda", "s.a.", "eireli"],
    },
    Country {
        code: "CA",
        name: "Canada",
        names: &["canada"],
        terms: &["inc", "corp", "ltée", "limitée", "ulc"],
    },
    Country {
        code: "CH",
        name: "Switzerland",
        names: &["switzerland", "schweiz", "suisse"],
        terms: &["ag", "gmbh", "sa", "sàrl"],
    },
    Country {
        code: "CZ",
        name: "Czech Republic",
        names: &["czechia", "česko"],
        terms: &["a.s.", "s.r.o.", "spol. s r.o.", "v.o.s."],
    },
    Country {
        code: "DE",
        name: "Germany",
        names: &["germany", "deutschland"],
        terms: &[
            "ag", "e.g.", "e.k.", "e.v.", "gbr", "gmbh", "gmbh & co. kg", "kg", "kgaa", "ohg", "ug",
        ],
    },
    Country {
        code: "DK",
        name: "Denmark",
        names: &["denmark", "danmark"],
        terms: &["a/s", "amba", "aps", "fmba", "i/s", "ivs", "k/s", "p/s", "smba"],
    },
    Country {
        code: "EE",
        name: "Estonia",
        names: &["estonia", "eesti"],
        terms: &["as", "mtü", "oü", "tü", "uü"],
    },
    Country {
        code: "ES",
        name: "Spain",
        names: &["spain", "españa"],
        terms: &["s.a.", "s.l.", "s.l.u.", "s.coop.", "sociedad anónima", "sociedad limitada"],
    },
    Country {
        code: "FI",
        name: "Finland",
        names: &["finland", "suomi"],
        terms: &[
            "ab",
            "abp",
            "aktiebolag",
            "andelslag",
            "as oy",
            "as. oy",
            "as.oy",
            "asunto oy",
            "asunto-osakeyhtiö",
            "avoin yhtiö",
            "ay",
            "bostads ab",
            "försäkringsaktiebolaget",
            "julkinen osakeyhtiö",
            "keskinäinen osakeyhtiö",
            "kiinteistö oy",
            "kiinteistö osakeyhtiö",
            "kommandiittiyhtiö",
            "ky",
            "osakeyhtiö",
            "osuuskunta",
            "oy",
            "oyj",
            "oü",
            "r.f.",
            "r.y.",
            "rf",
            "ry",
            "s.r.",
            "sr",
            "suomi",
            "tmi",
            "toiminimi",
        ],
    },
    Country {
        code: "FR",
        name: "France",
        names: &["france"],
        terms: &["eurl", "sa", "sarl", "sas", "sasu", "sca", "sci", "scop", "snc", "société anonyme"],
    },
    Country {
        code: "GB",
        name: "United Kingdom",
        names: &["uk", "united kingdom", "great britain"],
        terms: &["cic", "cio", "limited", "llp", "lp", "ltd", "plc", "public limited company"],
    },
    Country {
        code: "HU",
        name: "Hungary",
        names: &["hungary", "magyarország"],
        terms: &["bt", "kft", "kkt", "nyrt", "zrt"],
    },
    Country {
        code: "IE",
        name: "Ireland",
        names: &["ireland", "éire"],
        terms: &["clg", "dac", "teoranta", "uc", "ltd", "plc"],
    },
    Country {
        code: "IN",
        name: "India",
        names: &["india"],
        terms: &["llp", "private limited", "pvt", "pvt ltd", "pvt. ltd."],
    },
    Country {
        code: "IS",
        name: "Iceland",
        names: &["iceland", "ísland"],
        terms: &["ehf", "hf", "sf"],
    },
    Country {
        code: "IT",
        name: "Italy",
        names: &["italy", "italia"],
        terms: &["s.a.s.", "s.n.c.", "s.p.a.", "s.r.l.", "spa", "srl"],
    },
    Country {
        code: "JP",
        name: "Japan",
        names: &["japan", "nippon"],
        terms: &["gk", "k.k.", "kabushiki kaisha", "kk", "yk"],
    },
    Country {
        code: "LT",
        name: "Lithuania",
        names: &["lithuania", "lietuva"],
        terms: &["ab", "uab", "všį"],
    },
    Country {
        code: "LU",
        name: "Luxembourg",
        names: &["luxembourg"],
        terms: &["s.à r.l.", "sàrl", "s.a.", "sarl", "sca", "scs"],
    },
    Country {
        code: "LV",
        name: "Latvia",
        names: &["latvia", "latvija"],
        terms: &["as", "sia"],
    },
    Country {
        code: "MX",
        name: "Mexico",
        names: &["mexico", "méxico"],
        terms: &["s.a. de c.v.", "s. de r.l.", "s. de r.l. de c.v."],
    },
    Country {
        code: "NL",
        name: "Netherlands",
        names: &["netherlands", "nederland"],
        terms: &["b.v.", "bv", "c.v.", "n.v.", "nv", "v.o.f."],
    },
    Country {
        code: "NO",
        name: "Norway",
        names: &["norway", "norge"],
        terms: &["ans", "as", "asa", "ba", "da", "enk", "ks", "nuf", "sa"],
    },
    Country {
        code: "PL",
        name: "Poland",
        names: &["poland", "polska"],
        terms: &["s.a.", "sp. j.", "sp. k.", "sp. z o.o.", "spółka akcyjna", "spółka z o.o."],
    },
    Country {
        code: "RU",
        name: "Russia",
        names: &["russia", "россия"],
        terms: &["ао", "зао", "ип", "оао", "ооо", "пао"],
    },
    Country {
        code: "SE",
        name: "Sweden",
        names: &["sweden", "sverige"],
        terms: &[
            "ab",
            "aktiebolag",
            "ek. för.",
            "ekonomisk förening",
            "enskild firma",
            "handelsbolag",
            "hb",
            "kb",
            "kommanditbolag",
            "publ",
        ],
    },
    Country {
        code: "SG",
        name: "Singapore",
        names: &["singapore"],
        terms: &["pte", "pte ltd", "pte. ltd."],
    },
    Country {
        code: "TR",
        name: "Turkey",
        names: &["turkey", "türkiye"],
        terms: &["a.ş.", "ltd. şti."],
    },
    Country {
        code: "US",
        name: "United States",
        names: &["usa", "united states"],
        terms: &[
            "co", "company", "corp", "corporation", "inc", "incorporated", "l.l.c.", "l.p.", "llc",
            "llp", "lp", "ltd", "pc", "pllc",
        ],
    },
    Country {
        code: "ZA",
        name: "South Africa",
        names: &["south africa"],
        terms: &["cc", "pty ltd", "(pty) ltd", "soc ltd"],
    },
];

/// Look a country up by ISO code ("FI") or by name ("Finland"), ignoring case.
pub fn find_country(key: &str) -> Option<&'static Country> {
    let key = key.trim();
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(key) || c.name.eq_ignore_ascii_case(key))
}

/// Every country name of every country, lowercase.
pub fn all_country_names() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().flat_map(|c| c.names.iter().copied())
}

/// Whether a lowercase token is the name of some country.
pub fn is_country_name(token: &str) -> bool {
    all_country_names().any(|n| n == token)
}
