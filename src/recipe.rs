use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe. Entry order is display order; there is
/// no uniqueness constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    /// Zero means "unspecified".
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub notes: String,
}

impl Ingredient {
    /// The note to display, if any. Empty notes and the legacy `/`
    /// placeholder both count as "no note".
    #[must_use]
    pub fn display_note(&self) -> Option<&str> {
        if self.notes.is_empty() || self.notes == "/" { None } else { Some(&self.notes) }
    }

    /// Single-line rendering, e.g. `milk 0.50 l (warm)`. Whole quantities
    /// print without decimals, fractional ones with two.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = self.name.clone();
        if self.quantity != 0.0 {
            if self.quantity.round() == self.quantity {
                out.push_str(&format!(" {}", self.quantity as i64));
            } else {
                out.push_str(&format!(" {:.2}", self.quantity));
            }
        }
        if !self.unit.is_empty() {
            out.push(' ');
            out.push_str(&self.unit);
        }
        if let Some(note) = self.display_note() {
            out.push_str(&format!(" ({note})"));
        }
        out
    }
}

/// A catalogue recipe as stored in the remote collection.
///
/// Field names follow the stored documents (`mainingredient`, `preptime`,
/// ...). `id` is assigned by the backend on first insert and is absent
/// until then; it is required for updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "mainingredient", default)]
    pub main_ingredient: String,
    /// Preparation time in minutes.
    #[serde(rename = "preptime", default)]
    pub prep_time: u32,
    #[serde(rename = "defaultportions", default)]
    pub default_portions: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Raw image bytes. On the wire this is a base64 string, `null` when
    /// absent; the stored documents already use that format.
    #[serde(default, with = "image_bytes")]
    pub image: Option<Vec<u8>>,
}

mod image_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(b) => s.serialize_str(&STANDARD.encode(b)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw {
            Some(s) if !s.is_empty() => {
                STANDARD.decode(s.as_bytes()).map(Some).map_err(serde::de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}
