//! Detail view assembly: labelled fields plus the structure image state.

use compound_lookup_catalog::{Compound, FIELD_LABELS};
use compound_lookup_db::QueryError;

use crate::store::CompoundStore;
use crate::structure::{ImageSettings, StructureImage};

/// Everything a front end needs to show one compound.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundDetail {
    pub compound: Compound,
    pub image: StructureImage,
}

impl CompoundDetail {
    /// Attach the structure image state to an already-fetched record.
    pub fn for_compound(compound: Compound, images: &ImageSettings) -> Self {
        let image = images.resolve(&compound.cas_number);
        Self { compound, image }
    }
}

/// Fetch one compound by exact identifier and resolve its image.
///
/// `Ok(None)` when no record has that identifier. Image problems never
/// surface as errors here; they are reported through [`StructureImage`].
pub fn resolve_detail<S: CompoundStore + ?Sized>(
    store: &S,
    cas: &str,
    images: &ImageSettings,
) -> Result<Option<CompoundDetail>, QueryError> {
    Ok(store
        .get(cas.trim())?
        .map(|compound| CompoundDetail::for_compound(compound, images)))
}

/// Labelled field values in display order.
pub fn detail_fields(compound: &Compound) -> Vec<(&'static str, String)> {
    FIELD_LABELS
        .iter()
        .map(|(column, label)| (*label, compound.field(column).unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> compound_lookup_db::Connection {
        let conn = compound_lookup_db::open_memory().unwrap();
        conn.execute(
            "INSERT INTO compounds (cas_number, compound_name_en, has_aroma)
             VALUES ('64-17-5', 'Ethanol', 1)",
            [],
        )
        .unwrap();
        conn
    }

    #[test]
    fn unknown_identifier_is_none() {
        let conn = setup();
        let images = ImageSettings::new("img-does-not-exist");
        assert!(resolve_detail(&conn, "999-99-9", &images).unwrap().is_none());
    }

    #[test]
    fn detail_without_image_is_not_found() {
        let conn = setup();
        let dir = tempfile::tempdir().unwrap();
        let detail = resolve_detail(&conn, " 64-17-5 ", &ImageSettings::new(dir.path()))
            .unwrap()
            .unwrap();
        assert_eq!(detail.compound.compound_name_en.as_deref(), Some("Ethanol"));
        assert!(matches!(detail.image, StructureImage::NotFound { .. }));
    }

    #[test]
    fn fields_follow_label_order() {
        let mut c = Compound::new("64-17-5");
        c.odor = Some("alcoholic".to_string());
        c.has_aroma = Some(true);
        let fields = detail_fields(&c);
        assert_eq!(fields.len(), FIELD_LABELS.len());
        assert_eq!(fields[0], ("CAS", "64-17-5".to_string()));
        assert!(fields.contains(&("Odor", "alcoholic".to_string())));
        assert_eq!(fields.last(), Some(&("Aroma", "yes".to_string())));
    }
}
