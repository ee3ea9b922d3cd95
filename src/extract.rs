use crate::table::Record;

/// A usable row: the non-empty primary value plus, for vocabulary rows, an
/// optional part-of-speech/gender tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub value: String,
    pub category: Option<String>,
}

/// Vocabulary row → Entry. The headword is the `ord` cell up to the first
/// comma ("hus, huset" lists inflections; only "hus" is addressable), the
/// category is the `gender` cell ('en', 'et', 'verb', 'expression', ...).
/// Rows with an empty headword yield nothing.
pub fn word_entry(record: &Record) -> Option<Entry> {
    let word = record
        .get("ord")
        .split(',')
        .next()
        .unwrap_or("")
        .trim();
    if word.is_empty() {
        return None;
    }
    let gender = record.get("gender").trim();
    Some(Entry {
        value: word.to_string(),
        category: (!gender.is_empty()).then(|| gender.to_string()),
    })
}

/// Story row → Entry. The site routes stories by their verbatim Norwegian
/// title, so `titleNorwegian` is used as-is, trimmed.
pub fn story_entry(record: &Record) -> Option<Entry> {
    let title = record.get("titleNorwegian").trim();
    if title.is_empty() {
        return None;
    }
    Some(Entry {
        value: title.to_string(),
        category: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_with_gender() {
        let r = Record::from_pairs(&[("ord", "hus, huset"), ("gender", "et")]);
        let e = word_entry(&r).unwrap();
        assert_eq!(e.value, "hus");
        assert_eq!(e.category.as_deref(), Some("et"));
    }

    #[test]
    fn word_without_gender() {
        let r = Record::from_pairs(&[("ord", "kanskje"), ("gender", "  ")]);
        let e = word_entry(&r).unwrap();
        assert_eq!(e.value, "kanskje");
        assert_eq!(e.category, None);
    }

    #[test]
    fn headword_truncated_at_first_comma() {
        let r = Record::from_pairs(&[("ord", "gå, går, gikk, har gått"), ("gender", "verb")]);
        assert_eq!(word_entry(&r).unwrap().value, "gå");
    }

    #[test]
    fn blank_headword_skipped() {
        for ord in ["", "   ", " , huset"] {
            let r = Record::from_pairs(&[("ord", ord), ("gender", "et")]);
            assert_eq!(word_entry(&r), None, "ord={:?}", ord);
        }
    }

    #[test]
    fn missing_ord_column_skipped() {
        let r = Record::from_pairs(&[("gender", "en")]);
        assert_eq!(word_entry(&r), None);
    }

    #[test]
    fn story_title_verbatim() {
        let r = Record::from_pairs(&[("titleNorwegian", "  En dag på stranden ")]);
        let e = story_entry(&r).unwrap();
        assert_eq!(e.value, "En dag på stranden");
        assert_eq!(e.category, None);
    }

    #[test]
    fn blank_story_title_skipped() {
        let r = Record::from_pairs(&[("titleNorwegian", "   ")]);
        assert_eq!(story_entry(&r), None);
    }
}
