//! 顔型カタログ
//!
//! 6種類の顔型データを静的テーブルとして保持する。
//! 実行時に追加・変更されることはない。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 顔型キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeId {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Oblong,
}

impl ShapeId {
    /// テーブル順の全キー
    pub const ALL: [ShapeId; 6] = [
        ShapeId::Oval,
        ShapeId::Round,
        ShapeId::Square,
        ShapeId::Heart,
        ShapeId::Diamond,
        ShapeId::Oblong,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ShapeId::Oval => "oval",
            ShapeId::Round => "round",
            ShapeId::Square => "square",
            ShapeId::Heart => "heart",
            ShapeId::Diamond => "diamond",
            ShapeId::Oblong => "oblong",
        }
    }

    /// 対応するカタログエントリ
    pub fn category(&self) -> &'static ShapeCategory {
        &CATALOG[*self as usize]
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShapeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        find_by_name(s)
            .map(|category| category.id)
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

/// 顔型エントリ
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeCategory {
    pub id: ShapeId,
    pub name: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

/// 顔型テーブル（`ShapeId` の宣言順と一致させること）
pub static CATALOG: [ShapeCategory; 6] = [
    ShapeCategory {
        id: ShapeId::Oval,
        name: "Oval",
        description: "Balanced proportions with a slightly curved jawline and forehead that's a bit wider than the chin.",
        tips: &[
            "Most versatile face shape",
            "Suits almost any hairstyle",
            "Can experiment with various makeup looks",
            "Avoid styles that add too much volume",
        ],
    },
    ShapeCategory {
        id: ShapeId::Round,
        name: "Round",
        description: "Full cheeks and a rounded chin with width and length roughly equal.",
        tips: &[
            "Add height with layered cuts",
            "Side parts work better than center parts",
            "Contour cheeks for definition",
            "Avoid blunt cuts that emphasize roundness",
        ],
    },
    ShapeCategory {
        id: ShapeId::Square,
        name: "Square",
        description: "Strong, angular jawline with forehead, cheeks, and jaw roughly the same width.",
        tips: &[
            "Soften angles with layers",
            "Side-swept bangs add femininity",
            "Avoid blunt cuts at jaw level",
            "Use contouring to soften sharp angles",
        ],
    },
    ShapeCategory {
        id: ShapeId::Heart,
        name: "Heart",
        description: "Wider forehead and cheekbones with a narrow, pointed chin.",
        tips: &[
            "Add volume to lower face",
            "Side parts balance proportions",
            "Avoid styles that add width at temples",
            "Chin-length cuts work well",
        ],
    },
    ShapeCategory {
        id: ShapeId::Diamond,
        name: "Diamond",
        description: "Narrow forehead and chin with wide cheekbones.",
        tips: &[
            "Add width at forehead and chin",
            "Side-swept bangs work well",
            "Avoid high ponytails",
            "Chin-length bobs are flattering",
        ],
    },
    ShapeCategory {
        id: ShapeId::Oblong,
        name: "Oblong",
        description: "Face length is greater than width with a long, straight cheek line.",
        tips: &[
            "Add width with layered styles",
            "Bangs help shorten face length",
            "Avoid long, straight styles",
            "Side parts add width",
        ],
    },
];

/// 全カテゴリ（テーブル順）
pub fn all() -> &'static [ShapeCategory] {
    &CATALOG
}

/// 表示名から検索（大文字小文字を区別しない）
pub fn find_by_name(name: &str) -> Option<&'static ShapeCategory> {
    let needle = name.trim();
    CATALOG.iter().find(|c| c.name.eq_ignore_ascii_case(needle))
}
