//! Display-language support.
//!
//! Japanese is the source language: every user-visible phrase the engine
//! produces is written in Japanese at the call site and routed through
//! [`Language::translate`], which substitutes the English or Korean
//! rendering when another language is active. Unknown phrases fall back
//! to the Japanese original.

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ja,
    En,
    Ko,
}

impl Language {
    /// Parses a culture code (`ja-JP`, `en-US`, `ko-KR`, or the bare
    /// two-letter form). Anything unrecognized defaults to Japanese.
    pub fn from_code(code: &str) -> Self {
        match code {
            "en-US" | "en" => Self::En,
            "ko-KR" | "ko" => Self::Ko,
            _ => Self::Ja,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// Translates a Japanese phrase into this language.
    ///
    /// Returns the phrase itself for Japanese, and falls back to it when
    /// no translation is known.
    pub fn translate<'a>(self, phrase: &'a str) -> &'a str {
        let translated = match self {
            Self::Ja => None,
            Self::En => english(phrase),
            Self::Ko => korean(phrase),
        };
        translated.unwrap_or(phrase)
    }
}

fn english(phrase: &str) -> Option<&'static str> {
    Some(match phrase {
        // Category names
        "アバター" => "Avatar",
        "衣装" => "Clothing",
        "テクスチャ" => "Texture",
        "ギミック" => "Gimmick",
        "アクセサリー" => "Accessory",
        "髪型" => "Hair Style",
        "アニメーション" => "Animation",
        "ツール" => "Tool",
        "シェーダー" => "Shader",
        "カスタム" => "Custom",
        "不明" => "Unknown",
        // Folder buckets
        "改変用データ" => "Modifiable Data",
        "ドキュメント" => "Document",
        "Unityパッケージ" => "Unity Package",
        "マテリアル" => "Material",
        // Navigation
        "ここには現在のパスが表示されます" => "The current path is displayed here",
        "検索中... - " => "Searching... - ",
        "作者" => "Author",
        "タイトル" => "Title",
        "カテゴリ" => "Category",
        "メモ" => "Memo",
        _ => return None,
    })
}

fn korean(phrase: &str) -> Option<&'static str> {
    Some(match phrase {
        // Category names
        "アバター" => "아바타",
        "衣装" => "의상",
        "テクスチャ" => "텍스처",
        "ギミック" => "기믹",
        "アクセサリー" => "액세서리",
        "髪型" => "헤어스타일",
        "アニメーション" => "애니메이션",
        "ツール" => "도구",
        "シェーダー" => "셰이더",
        "カスタム" => "커스텀",
        "不明" => "알 수 없음",
        // Folder buckets
        "改変用データ" => "개변용 데이터",
        "ドキュメント" => "문서",
        "Unityパッケージ" => "Unity 패키지",
        "マテリアル" => "머티리얼",
        // Navigation
        "ここには現在のパスが表示されます" => "여기에 현재 경로가 표시됩니다",
        "検索中... - " => "검색 중... - ",
        "作者" => "작자",
        "タイトル" => "타이틀",
        "カテゴリ" => "카테고리",
        "メモ" => "메모",
        _ => return None,
    })
}
