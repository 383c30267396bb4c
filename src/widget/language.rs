/// Target languages offered by the widget, in drop-down order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    English,
    French,
    German,
    Spanish,
    Hindi,
    Chinese,
    Arabic,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 7] = [
        TargetLanguage::English,
        TargetLanguage::French,
        TargetLanguage::German,
        TargetLanguage::Spanish,
        TargetLanguage::Hindi,
        TargetLanguage::Chinese,
        TargetLanguage::Arabic,
    ];

    pub const DEFAULT: TargetLanguage = TargetLanguage::English;

    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::English => "en",
            TargetLanguage::French => "fr",
            TargetLanguage::German => "de",
            TargetLanguage::Spanish => "es",
            TargetLanguage::Hindi => "hi",
            TargetLanguage::Chinese => "zh",
            TargetLanguage::Arabic => "ar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::French => "French",
            TargetLanguage::German => "German",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Chinese => "Chinese",
            TargetLanguage::Arabic => "Arabic",
        }
    }

    /// Exact, case-sensitive lookup by two-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_in_dropdown_order() {
        let codes: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["en", "fr", "de", "es", "hi", "zh", "ar"]);
    }

    #[test]
    fn from_code_round_trips_every_language() {
        for lang in TargetLanguage::ALL {
            assert_eq!(TargetLanguage::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn from_code_rejects_unknown_and_miscased_codes() {
        assert_eq!(TargetLanguage::from_code("ja"), None);
        assert_eq!(TargetLanguage::from_code("FR"), None);
        assert_eq!(TargetLanguage::from_code(""), None);
    }
}
