pub trait ToIndustryKey {
    /// Returns the trimmed, upper-cased form used for industry storage and
    /// matching.
    fn to_industry_key(&self) -> String;
}

impl ToIndustryKey for str {
    fn to_industry_key(&self) -> String {
        self.trim().to_uppercase()
    }
}

impl ToIndustryKey for String {
    fn to_industry_key(&self) -> String {
        self.as_str().to_industry_key()
    }
}
