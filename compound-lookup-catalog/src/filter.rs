//! Search filter types.

/// Tri-state constraint on the `has_aroma` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AromaFilter {
    /// No constraint.
    #[default]
    Any,
    /// `has_aroma` must be true.
    Aromatic,
    /// `has_aroma` must be false or NULL.
    NotAromatic,
}

/// Optional substring filters plus the aroma constraint.
///
/// A field left as `None` (or blank) imposes no constraint. Built fresh for
/// every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundFilter {
    pub cas_number: Option<String>,
    pub compound_name_cn: Option<String>,
    pub category: Option<String>,
    pub compound_name_en: Option<String>,
    pub aroma: AromaFilter,
}

impl CompoundFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cas_number(mut self, value: impl Into<String>) -> Self {
        self.cas_number = Some(value.into());
        self
    }

    pub fn compound_name_cn(mut self, value: impl Into<String>) -> Self {
        self.compound_name_cn = Some(value.into());
        self
    }

    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn compound_name_en(mut self, value: impl Into<String>) -> Self {
        self.compound_name_en = Some(value.into());
        self
    }

    pub fn aroma(mut self, aroma: AromaFilter) -> Self {
        self.aroma = aroma;
        self
    }

    /// Trim every text field and drop the ones left empty.
    pub fn normalized(&self) -> Self {
        fn clean(v: &Option<String>) -> Option<String> {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }
        Self {
            cas_number: clean(&self.cas_number),
            compound_name_cn: clean(&self.compound_name_cn),
            category: clean(&self.category),
            compound_name_en: clean(&self.compound_name_en),
            aroma: self.aroma,
        }
    }

    /// Present text constraints as `(column, value)` pairs, in a fixed order.
    pub fn text_constraints(&self) -> Vec<(&'static str, &str)> {
        [
            ("cas_number", &self.cas_number),
            ("compound_name_cn", &self.compound_name_cn),
            ("category", &self.category),
            ("compound_name_en", &self.compound_name_en),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
        .collect()
    }

    /// True when the filter would match every row.
    pub fn is_unconstrained(&self) -> bool {
        let n = self.normalized();
        n.text_constraints().is_empty() && n.aroma == AromaFilter::Any
    }
}
