//! The clinical categories and their published CSV feeds.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// One clinical category with its own feed, metric set, and table layout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FeedCategory {
    DesenvolvimentoInfantil,
    Vacinas,
    GestacaoPuerperio,
    Hipertensao,
    Diabetes,
    SaudeMulher,
    PessoaIdosa,
}

impl FeedCategory {
    pub const ALL: [FeedCategory; 7] = [
        FeedCategory::DesenvolvimentoInfantil,
        FeedCategory::Vacinas,
        FeedCategory::GestacaoPuerperio,
        FeedCategory::Hipertensao,
        FeedCategory::Diabetes,
        FeedCategory::SaudeMulher,
        FeedCategory::PessoaIdosa,
    ];

    /// Stable key used on the command line and in the feeds file.
    pub fn key(self) -> &'static str {
        match self {
            FeedCategory::DesenvolvimentoInfantil => "desenvolvimento-infantil",
            FeedCategory::Vacinas => "vacinas",
            FeedCategory::GestacaoPuerperio => "gestacao-puerperio",
            FeedCategory::Hipertensao => "hipertensao",
            FeedCategory::Diabetes => "diabetes",
            FeedCategory::SaudeMulher => "saude-mulher",
            FeedCategory::PessoaIdosa => "pessoa-idosa",
        }
    }

    /// Human label used in headings and report titles.
    pub fn label(self) -> &'static str {
        match self {
            FeedCategory::DesenvolvimentoInfantil => "Desenvolvimento Infantil",
            FeedCategory::Vacinas => "Desenvolvimento Infantil (Vacinas)",
            FeedCategory::GestacaoPuerperio => "Gestação e Puerpério",
            FeedCategory::Hipertensao => "Hipertensão",
            FeedCategory::Diabetes => "Diabetes",
            FeedCategory::SaudeMulher => "Saúde da Mulher",
            FeedCategory::PessoaIdosa => "Pessoa Idosa",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Inclusive index window, into the cleaned header list, of the
    /// indicator columns summarized for this category. Categories without
    /// a window render no per-column metrics block.
    pub fn column_range(self) -> Option<(usize, usize)> {
        match self {
            FeedCategory::SaudeMulher => Some((1, 11)),
            FeedCategory::Vacinas => Some((1, 12)),
            _ => None,
        }
    }

    fn default_url(self) -> &'static str {
        match self {
            FeedCategory::DesenvolvimentoInfantil => {
                "https://docs.google.com/spreadsheets/d/e/2PACX-1vRJk3K_1DtxtxvBx5UuRIbsl_OGzNA9AMMx3TbacImInVTl759ziDlxBK0nlwZg1J_iKxjktwvI5FaH/pub?gid=1142482515&single=true&output=csv"
            }
            FeedCategory::Vacinas => {
                "https://docs.google.com/spreadsheets/d/e/2PACX-1vRJk3K_1DtxtxvBx5UuRIbsl_OGzNA9AMMx3TbacImInVTl759ziDlxBK0nlwZg1J_iKxjktwvI5FaH/pub?gid=1899832726&single=true&output=csv"
            }
            FeedCategory::GestacaoPuerperio => {
                "https://docs.google.com/spreadsheets/d/e/2PACX-1vSA7ZEnYITSAdJO8T5LvvnDewjPeqMT57kDv_oSeuFUUznKI3FQ5pGg2Ic34k4ZShbWtONP-dvJOABQ/pub?gid=1768767677&single=true&output=csv"
            }
            FeedCategory::Hipertensao => {
                "https://docs.google.com/spreadsheets/d/e/2PACX-1vT9k_e_-jlJbu3GvtHBhvCfuUbuC7l85MV_jjZRnbsd3lIqmoKF2pLhGl1JnSfziVXze5zkGCXdPb2n/pub?output=csv"
            }
            FeedCategory::Diabetes => {
                "https://docs.google.com/spreadsheets/d/e/2PACX-1vSbfV1Kc6st6COoy-FxrbfnC_Ac3bxobCVY_-HXj0oyXNnVo7uVld2VVJh7gAhXAPGHXlZGutzjivjP/pub?gid=1534038569&single=true&output=csv"
            }
            FeedCategory::SaudeMulher => {
                "https://docs.google.com/spreadsheets/d/e/2PACX-1vQLX3B-1FNtn9BZVDseNGuRiPtUUtm13TTx_vI-quwscEMMsTVCp-NjL7b9YH4Cr4vgSI6jAH52M8mk/pub?gid=1711913800&single=true&output=csv"
            }
            FeedCategory::PessoaIdosa => {
                "https://docs.google.com/spreadsheets/d/e/2PACX-1vSsrC8_qNUsaD2Yem4lAii-GtidlqdFcR65dSpjEKxv5u6Xwv2cH11_EkkYzxDFGYAB6d5fbcCN1mMo/pub?gid=1534038569&single=true&output=csv"
            }
        }
    }
}

impl fmt::Display for FeedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("categoria desconhecida: {0}")]
pub struct UnknownCategory(pub String);

/// Per-category feed URL table. Starts from the builtin published
/// spreadsheets and accepts overrides keyed by category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRegistry {
    urls: BTreeMap<FeedCategory, String>,
}

impl FeedRegistry {
    pub fn builtin() -> Self {
        let urls = FeedCategory::ALL
            .into_iter()
            .map(|category| (category, category.default_url().to_string()))
            .collect();
        Self { urls }
    }

    /// Replaces URLs for the categories named in `overrides`. An unknown
    /// key is an error rather than a silently ignored entry.
    pub fn with_overrides(
        mut self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Self, UnknownCategory> {
        for (key, url) in overrides {
            let category =
                FeedCategory::from_key(key).ok_or_else(|| UnknownCategory(key.clone()))?;
            self.urls.insert(category, url.clone());
        }
        Ok(self)
    }

    pub fn url(&self, category: FeedCategory) -> &str {
        &self.urls[&category]
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeedCategory, &str)> {
        self.urls
            .iter()
            .map(|(category, url)| (*category, url.as_str()))
    }
}

impl Default for FeedRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
