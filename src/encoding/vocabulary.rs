//! Known values of the nominal (non-ordinal) RawSpec fields.
//!
//! Values are kept in byte-wise sorted order; the first one is the reference
//! category that baseline coding drops. The lists are a fallback: a schema
//! column `<field>_<value>` is set for any value, listed here or not.

/// Known values of one nominal field.
#[derive(Debug)]
pub struct OneHotVocabulary {
    field: &'static str,
    values: &'static [&'static str],
}

impl OneHotVocabulary {
    /// Creates a vocabulary. `values` must be sorted and distinct.
    #[must_use]
    pub const fn new(field: &'static str, values: &'static [&'static str]) -> Self {
        Self { field, values }
    }

    /// Column prefix, e.g. `Company`.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// All known values, reference first.
    #[must_use]
    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    /// The dropped reference value.
    #[must_use]
    pub fn reference(&self) -> Option<&'static str> {
        self.values.first().copied()
    }

    /// Indicator column name for `value`: `<field>_<value>`.
    #[must_use]
    pub fn column_name(&self, value: &str) -> String {
        format!("{}_{}", self.field, value)
    }

    /// Whether `column` is an indicator of this field.
    #[must_use]
    pub fn owns(&self, column: &str) -> bool {
        column
            .strip_prefix(self.field)
            .is_some_and(|rest| rest.starts_with('_'))
    }

    /// The indicator column `value` turns on, whether or not it is known.
    #[must_use]
    pub fn hot_column(&self, value: &str) -> Option<String> {
        let value = value.trim();
        (!value.is_empty()).then(|| self.column_name(value))
    }

    /// Indicator columns for `value`: one per non-reference known value.
    ///
    /// The matching column is 1 and the rest 0. The reference value and any
    /// value outside the vocabulary yield all zeros.
    #[must_use]
    pub fn indicators(&self, value: &str) -> Vec<(String, f64)> {
        let value = value.trim();
        self.values
            .iter()
            .skip(1)
            .map(|known| {
                let hot = if *known == value { 1.0 } else { 0.0 };
                (self.column_name(known), hot)
            })
            .collect()
    }
}

/// Laptop manufacturer.
pub static MANUFACTURER: OneHotVocabulary = OneHotVocabulary::new(
    "Company",
    &[
        "Acer", "Apple", "Asus", "Chuwi", "Dell", "Google", "HP", "Huawei", "LG", "Lenovo",
        "MSI", "Microsoft", "Razer", "Samsung", "Toshiba", "Xiaomi",
    ],
);

/// Product category.
pub static PRODUCT_CATEGORY: OneHotVocabulary = OneHotVocabulary::new(
    "TypeName",
    &[
        "2 in 1 Convertible",
        "Gaming",
        "Netbook",
        "Notebook",
        "Ultrabook",
        "Workstation",
    ],
);

/// Operating system.
pub static OPERATING_SYSTEM: OneHotVocabulary = OneHotVocabulary::new(
    "OpSys",
    &[
        "Chrome OS",
        "Linux",
        "Mac OS X",
        "No OS",
        "Windows 10",
        "Windows 11",
        "Windows 7",
        "macOS",
    ],
);

/// CPU vendor.
pub static CPU_BRAND: OneHotVocabulary = OneHotVocabulary::new(
    "cpu_company",
    &["AMD", "Apple M-Series", "Intel", "Other", "Samsung"],
);

/// GPU vendor.
pub static GPU_BRAND: OneHotVocabulary = OneHotVocabulary::new(
    "gpu_company",
    &["AMD", "ARM", "Apple", "Intel", "Nvidia", "Other"],
);

/// GPU product series across vendors.
pub static GPU_SERIES: OneHotVocabulary = OneHotVocabulary::new(
    "gpu_series",
    &[
        "FirePro",
        "GTX 10 Series",
        "GTX 16 Series",
        "GTX 7 Series",
        "GTX 8 Series",
        "GTX 9 Series",
        "GeForce",
        "HD Graphics",
        "Integrated",
        "Iris Graphics",
        "Iris Plus Graphics",
        "Iris Pro Graphics",
        "Iris Xe Graphics",
        "MX Series",
        "Mali",
        "Quadro",
        "RTX 20 Series",
        "RTX 30 Series",
        "RTX 40 Series",
        "RTX 50 Series",
        "Radeon",
        "Radeon Pro",
        "Radeon R5",
        "Radeon R7",
        "Radeon RX",
        "Radeon RX 5000 Series",
        "Radeon RX 6000 Series",
        "Radeon RX 7000 Series",
        "UHD Graphics",
    ],
);

/// Every nominal vocabulary, in column-emission order.
pub static NOMINAL_FIELDS: [&OneHotVocabulary; 6] = [
    &MANUFACTURER,
    &PRODUCT_CATEGORY,
    &OPERATING_SYSTEM,
    &CPU_BRAND,
    &GPU_BRAND,
    &GPU_SERIES,
];
