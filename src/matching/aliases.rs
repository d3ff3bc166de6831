//! Franchise and character alias expansion across scripts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One canonical franchise/series key with its known variant spellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Canonical English name, stored lowercase.
    pub key: String,
    pub variants: Vec<String>,
}

impl AliasEntry {
    pub fn new(key: &str, variants: &[&str]) -> Self {
        Self {
            key: key.to_lowercase(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Bidirectional alias table, queried with [`AliasTable::expand`].
///
/// Entry order is preserved so expansion output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AliasEntry>", into = "Vec<AliasEntry>")]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn new(entries: Vec<AliasEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| AliasEntry {
                key: e.key.trim().to_lowercase(),
                variants: e.variants,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand a query into every known name variant.
    ///
    /// The trimmed query always comes first. Then, in table order:
    /// 1. direct key hits add the key's variants
    /// 2. reverse hits (query equals a variant) add the owning key and its variants
    /// 3. space-insensitive hits on key or variant add the key and its variants
    ///
    /// Duplicates are dropped, keeping first occurrence.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let trimmed = query.trim();
        let mut out = Expansion::default();
        out.push(trimmed);
        if trimmed.is_empty() {
            return out.into_vec();
        }

        let lower = trimmed.to_lowercase();
        let compact = strip_spaces(&lower);

        for entry in &self.entries {
            if entry.key == lower {
                out.extend(&entry.variants);
            }
        }

        for entry in &self.entries {
            if entry.variants.iter().any(|v| v.to_lowercase() == lower) {
                out.push(&entry.key);
                out.extend(&entry.variants);
            }
        }

        for entry in &self.entries {
            let key_hit = strip_spaces(&entry.key) == compact;
            let variant_hit = entry
                .variants
                .iter()
                .any(|v| strip_spaces(&v.to_lowercase()) == compact);
            if key_hit || variant_hit {
                out.push(&entry.key);
                out.extend(&entry.variants);
            }
        }

        out.into_vec()
    }
}

impl From<Vec<AliasEntry>> for AliasTable {
    fn from(entries: Vec<AliasEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<AliasTable> for Vec<AliasEntry> {
    fn from(table: AliasTable) -> Self {
        table.entries
    }
}

fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[derive(Default)]
struct Expansion {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl Expansion {
    fn push(&mut self, term: &str) {
        if self.seen.insert(term.to_string()) {
            self.ordered.push(term.to_string());
        }
    }

    fn extend(&mut self, terms: &[String]) {
        for term in terms {
            self.push(term);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(vec![
            AliasEntry::new(
                "bocchi the rock",
                &["ぼっち・ざ・ろっく", "ぼっちざろっく", "ぼざろ", "bocchi", "ぼっち"],
            ),
            AliasEntry::new(
                "hitori gotoh",
                &["後藤ひとり", "ごとうひとり", "ぼっちちゃん", "gotoh hitori"],
            ),
            AliasEntry::new(
                "chainsaw man",
                &["チェンソーマン", "チェーンソーマン", "デンジ", "マキマ", "パワー"],
            ),
            AliasEntry::new(
                "hatsune miku",
                &["初音ミク", "ミク", "miku", "雪ミク", "snow miku"],
            ),
            AliasEntry::new(
                "fate/grand order",
                &["fgo", "フェイト", "fate", "fate grand order", "ふぇいと"],
            ),
            AliasEntry::new(
                "saber",
                &["セイバー", "アルトリア", "artoria pendragon", "アルトリア・ペンドラゴン"],
            ),
            AliasEntry::new(
                "touhou project",
                &["東方project", "東方", "touhou", "東方ロストワード", "touhou lostword"],
            ),
            AliasEntry::new("genshin impact", &["原神", "genshin"]),
            AliasEntry::new(
                "spy x family",
                &["スパイファミリー", "spy family", "アーニャ", "anya forger"],
            ),
            AliasEntry::new(
                "jujutsu kaisen",
                &["呪術廻戦", "jjk", "五条悟", "gojo satoru"],
            ),
            AliasEntry::new(
                "demon slayer",
                &["鬼滅の刃", "kimetsu no yaiba", "kimetsu", "竈門炭治郎", "竈門禰豆子"],
            ),
            AliasEntry::new(
                "frieren",
                &["葬送のフリーレン", "フリーレン", "sousou no frieren"],
            ),
            AliasEntry::new("blue archive", &["ブルーアーカイブ", "ブルアカ"]),
            AliasEntry::new("re:zero", &["リゼロ", "rezero", "レム", "ラム"]),
            AliasEntry::new("oshi no ko", &["推しの子", "【推しの子】", "星野アイ", "ai hoshino"]),
            AliasEntry::new("hololive", &["ホロライブ", "holo live"]),
        ])
    }
}
