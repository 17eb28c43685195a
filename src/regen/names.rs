// src/regen/names.rs
//! Hebrew → English lookups used when regenerating the literal.

/// Hebrew tractate name → literal key. Both spellings of Eruvin are accepted.
pub const TRACTATE_NAMES: [(&str, &str); 38] = [
    ("בבא בתרא", "bava batra"),
    ("בבא מציעא", "bava metzia"),
    ("בבא קמא", "bava kamma"),
    ("ביצה", "beitza"),
    ("בכורות", "bekhorot"),
    ("ברכות", "berakhot"),
    ("גיטין", "gittin"),
    ("חגיגה", "chagigah"),
    ("חולין", "chullin"),
    ("יבמות", "yevamot"),
    ("יומא", "yoma"),
    ("כריתות", "keritot"),
    ("כתובות", "ketubot"),
    ("מגילה", "megillah"),
    ("מועד קטן", "moed katan"),
    ("מכות", "makkot"),
    ("מנחות", "menachot"),
    ("נדרים", "nedarim"),
    ("נזיר", "nazir"),
    ("נידה", "niddah"),
    ("פסחים", "pesachim"),
    ("קידושין", "kiddushin"),
    ("ראש השנה", "rosh hashanah"),
    ("סנהדרין", "sanhedrin"),
    ("סוכה", "sukkah"),
    ("סוטה", "sotah"),
    ("שבועות", "shevuot"),
    ("שבת", "shabbat"),
    ("תמורה", "temurah"),
    ("תמיד", "tamid"),
    ("תענית", "taanit"),
    ("זבחים", "zevachim"),
    ("ערובין", "eruvin"),
    ("עירובין", "eruvin"),
    ("הוריות", "horayot"),
    ("מעילה", "meilah"),
    ("עבודה זרה", "avodah zarah"),
    ("ערכין", "arakhin"),
];

/// Chapter label → (tractate key → English chapter name).
pub const CHAPTER_NAMES: &[(&str, &[(&str, &str)])] = &[
    ("פרק א", &[("berakhot", "Me'eimatay")]),
    ("פרק ב", &[("berakhot", "Hayah Korei"), ("shabbat", "BaMeh Madlikin")]),
    ("פרק ג", &[("berakhot", "Mi She'meto"), ("shabbat", "Kirah")]),
    ("פרק ד", &[("berakhot", "Tefilat HaShachar"), ("shabbat", "BaMeh Tomnin")]),
    ("פרק ה", &[("berakhot", "Ein Omdin"), ("shabbat", "BaMeh Beheimah")]),
    ("פרק ו", &[("berakhot", "Keytzad Mevarkhim"), ("shabbat", "BaMeh Ishah")]),
    ("פרק ז", &[("berakhot", "Sheloshah She'achlu"), ("shabbat", "Kelal Gadol")]),
    ("פרק ח", &[("berakhot", "Eilu Devarim"), ("shabbat", "HaMotzi Yayin")]),
    ("פרק ט", &[("berakhot", "HaRo'eh"), ("shabbat", "Amar Rabbi Akiva")]),
    ("פרק א - ארבעה אבות", &[("bava kamma", "Arba'ah Avot")]),
    ("פרק ב - כיצד הרגל", &[("bava kamma", "Keytzad HaRegel")]),
    ("פרק ג - המניח את הכד", &[("bava kamma", "HaMani'ach Et HaKad")]),
    ("פרק ד - שור שנגח ד' וה'", &[("bava kamma", "Shor She'nagach")]),
    ("פרק ה - שור שנגח את הפרה", &[("bava kamma", "Shor She'nagach Et HaParah")]),
    ("פרק ו - הכונס", &[("bava kamma", "HaKoneis")]),
    ("פרק ז - מרובה", &[("bava kamma", "Merubah")]),
    ("פרק ח - החובל", &[("bava kamma", "HaChovel")]),
    ("פרק ט - הגוזל עצים", &[("bava kamma", "HaGozel Etzim")]),
    ("פרק י - הגוזל ומאכיל", &[("bava kamma", "HaGozel UMa'akhil")]),
];

/// Literal key for a Hebrew tractate name; unknown names are lowercased
/// with spaces replaced by `_`.
pub fn normalize_tractate_name(hebrew: &str) -> String {
    TRACTATE_NAMES
        .iter()
        .find(|(he, _)| *he == hebrew)
        .map_or_else(|| hebrew.to_lowercase().replace(' ', "_"), |(_, key)| s!(*key))
}

/// Known English name for a chapter label within tractate `key`.
/// Exact match on both; callers fall back to `Chapter {n}`.
pub fn english_chapter_name(label: &str, key: &str) -> Option<&'static str> {
    CHAPTER_NAMES
        .iter()
        .find(|(he, _)| *he == label)
        .and_then(|(_, by_key)| by_key.iter().find(|(k, _)| *k == key))
        .map(|(_, name)| *name)
}
