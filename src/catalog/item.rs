//! Catalog item and item-kind types.

use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// The kind of a cataloged asset.
///
/// Serialized as its ordinal to stay wire-compatible with existing catalog
/// files; unknown ordinals decode as [`ItemKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ItemKind {
    Avatar,
    Clothing,
    Texture,
    Gimmick,
    Accessory,
    HairStyle,
    Animation,
    Tool,
    Shader,
    Custom,
    #[default]
    Unknown,
}

impl ItemKind {
    /// Every kind that appears as a browsable category, in display order.
    /// `Custom` and `Unknown` are handled separately by callers.
    pub const CATEGORIES: [ItemKind; 9] = [
        ItemKind::Avatar,
        ItemKind::Clothing,
        ItemKind::Texture,
        ItemKind::Gimmick,
        ItemKind::Accessory,
        ItemKind::HairStyle,
        ItemKind::Animation,
        ItemKind::Tool,
        ItemKind::Shader,
    ];

    fn name_ja(self) -> &'static str {
        match self {
            Self::Avatar => "アバター",
            Self::Clothing => "衣装",
            Self::Texture => "テクスチャ",
            Self::Gimmick => "ギミック",
            Self::Accessory => "アクセサリー",
            Self::HairStyle => "髪型",
            Self::Animation => "アニメーション",
            Self::Tool => "ツール",
            Self::Shader => "シェーダー",
            Self::Custom => "カスタム",
            Self::Unknown => "不明",
        }
    }

    /// The canonical display name of this kind. Items of kind `Custom`
    /// display their custom-category label instead; that substitution is
    /// the caller's concern.
    pub fn display_name(self, lang: Language) -> &'static str {
        lang.translate(self.name_ja())
    }

    /// Estimates the kind of a marketplace listing from its title and shop
    /// category string. Title keywords take precedence over the shop
    /// category; neither matching yields `Unknown`.
    pub fn estimate(title: &str, shop_category: &str) -> Self {
        const TITLE_KEYWORDS: [(&[&str], ItemKind); 9] = [
            (
                &["オリジナル3Dモデル", "オリジナル", "Avatar", "Original"],
                ItemKind::Avatar,
            ),
            (&["アニメーション", "Animation"], ItemKind::Animation),
            (&["衣装", "Clothing"], ItemKind::Clothing),
            (&["ギミック", "Gimmick"], ItemKind::Gimmick),
            (&["アクセサリ", "Accessory"], ItemKind::Accessory),
            (&["髪", "Hair"], ItemKind::HairStyle),
            (&["テクスチャ", "Eye", "Texture"], ItemKind::Texture),
            (&["ツール", "システム", "Tool", "System"], ItemKind::Tool),
            (&["シェーダー", "Shader"], ItemKind::Shader),
        ];

        for (keywords, kind) in TITLE_KEYWORDS {
            if keywords.iter().any(|keyword| title.contains(keyword)) {
                return kind;
            }
        }

        match shop_category {
            "3Dキャラクター" | "3Dモデル（その他）" => Self::Avatar,
            "3Dモーション・アニメーション" => Self::Animation,
            "3D衣装" => Self::Clothing,
            "3D小道具" => Self::Gimmick,
            "3D装飾品" => Self::Accessory,
            "3Dテクスチャ" => Self::Texture,
            "3Dツール・システム" => Self::Tool,
            _ => Self::Unknown,
        }
    }
}

impl From<ItemKind> for u8 {
    fn from(kind: ItemKind) -> u8 {
        match kind {
            ItemKind::Avatar => 0,
            ItemKind::Clothing => 1,
            ItemKind::Texture => 2,
            ItemKind::Gimmick => 3,
            ItemKind::Accessory => 4,
            ItemKind::HairStyle => 5,
            ItemKind::Animation => 6,
            ItemKind::Tool => 7,
            ItemKind::Shader => 8,
            ItemKind::Custom => 9,
            ItemKind::Unknown => 10,
        }
    }
}

impl From<u8> for ItemKind {
    fn from(ordinal: u8) -> ItemKind {
        match ordinal {
            0 => ItemKind::Avatar,
            1 => ItemKind::Clothing,
            2 => ItemKind::Texture,
            3 => ItemKind::Gimmick,
            4 => ItemKind::Accessory,
            5 => ItemKind::HairStyle,
            6 => ItemKind::Animation,
            7 => ItemKind::Tool,
            8 => ItemKind::Shader,
            9 => ItemKind::Custom,
            _ => ItemKind::Unknown,
        }
    }
}

/// A cataloged asset: an avatar or an add-on item.
///
/// Field names on the wire match the original catalog JSON files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Item {
    /// Display title. Not guaranteed unique.
    pub title: String,
    pub author_name: String,
    pub author_id: String,
    #[serde(rename = "ItemMemo")]
    pub memo: String,
    /// Marketplace listing id. Legacy files store `-1` for "none".
    #[serde(rename = "BoothId", with = "booth_id_compat")]
    pub booth_id: Option<i64>,
    /// Path of the item's content folder. Doubles as the item's identity
    /// for supported-avatar references and group membership.
    pub item_path: String,
    /// Optional side folder holding material data; empty when absent.
    pub material_path: String,
    #[serde(rename = "ImagePath")]
    pub thumbnail_path: String,
    #[serde(rename = "AuthorImageFilePath")]
    pub author_thumbnail_path: String,
    #[serde(rename = "Type")]
    pub kind: ItemKind,
    /// User-defined category label; meaningful only when `kind` is `Custom`.
    pub custom_category: String,
    /// Paths of the avatar items this item is compatible with. Empty means
    /// the item is universal (compatible with every avatar).
    #[serde(rename = "SupportedAvatar")]
    pub supported_avatars: Vec<String>,
}

impl Item {
    pub fn is_avatar(&self) -> bool {
        self.kind == ItemKind::Avatar
    }

    /// Whether the item is compatible with every avatar.
    pub fn is_universal(&self) -> bool {
        self.supported_avatars.is_empty()
    }

    pub fn supports(&self, avatar_path: &str) -> bool {
        self.supported_avatars.iter().any(|path| path == avatar_path)
    }
}

/// An author, as derived from the items they published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub thumbnail_path: String,
}

mod booth_id_compat {
    //! Maps the legacy `-1` sentinel to `None` and back.

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.unwrap_or(-1))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(if raw < 0 { None } else { Some(raw) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ordinal_round_trip() {
        for kind in ItemKind::CATEGORIES {
            assert_eq!(ItemKind::from(u8::from(kind)), kind);
        }
        assert_eq!(ItemKind::from(200u8), ItemKind::Unknown);
    }

    #[test]
    fn estimate_prefers_title_keywords() {
        assert_eq!(
            ItemKind::estimate("オリジナル3Dモデル「まりえる」", "3D衣装"),
            ItemKind::Avatar
        );
        assert_eq!(
            ItemKind::estimate("ふわふわワンピース", "3D衣装"),
            ItemKind::Clothing
        );
        assert_eq!(ItemKind::estimate("謎の何か", "謎カテゴリ"), ItemKind::Unknown);
    }

    #[test]
    fn item_json_uses_legacy_field_names() {
        let item = Item {
            title: "Dress".into(),
            author_name: "shop".into(),
            booth_id: None,
            kind: ItemKind::Clothing,
            supported_avatars: vec!["D:/avatars/maki".into()],
            ..Item::default()
        };

        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["Title"], "Dress");
        assert_eq!(json["BoothId"], -1);
        assert_eq!(json["Type"], 1);
        assert_eq!(json["SupportedAvatar"][0], "D:/avatars/maki");

        let back: Item = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, item);
        assert_eq!(back.booth_id, None);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let item: Item = serde_json::from_str(r#"{"Title":"bare"}"#).expect("deserialize");
        assert_eq!(item.title, "bare");
        assert_eq!(item.kind, ItemKind::Unknown);
        assert!(item.supported_avatars.is_empty());
    }
}
