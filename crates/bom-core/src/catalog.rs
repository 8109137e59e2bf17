//! 物料目錄與用量比例表

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{BomError, ComponentSetting};

/// 物料ID（固定的封閉集合，宣告順序即顯示順序）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComponentId {
    GiftBox8,
    FoldingBox2,
    FoilBag,
    BlisterTray,
    DolphinPatch,
    EssenceLiquid,
    EssenceBottle,
    WaistSeal,
    ExpCard,
    StickerRound,
}

impl ComponentId {
    /// 全部物料（目錄順序）
    pub const ALL: [ComponentId; 10] = [
        ComponentId::GiftBox8,
        ComponentId::FoldingBox2,
        ComponentId::FoilBag,
        ComponentId::BlisterTray,
        ComponentId::DolphinPatch,
        ComponentId::EssenceLiquid,
        ComponentId::EssenceBottle,
        ComponentId::WaistSeal,
        ComponentId::ExpCard,
        ComponentId::StickerRound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentId::GiftBox8 => "gift_box_8",
            ComponentId::FoldingBox2 => "folding_box_2",
            ComponentId::FoilBag => "foil_bag",
            ComponentId::BlisterTray => "blister_tray",
            ComponentId::DolphinPatch => "dolphin_patch",
            ComponentId::EssenceLiquid => "essence_liquid",
            ComponentId::EssenceBottle => "essence_bottle",
            ComponentId::WaistSeal => "waist_seal",
            ComponentId::ExpCard => "exp_card",
            ComponentId::StickerRound => "sticker_round",
        }
    }

    /// 目錄中的物料定義
    pub fn definition(&self) -> &'static ComponentDefinition {
        // ALL 與 COMPONENT_DEFINITIONS 同序，索引即為宣告順序
        &COMPONENT_DEFINITIONS[*self as usize]
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentId {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ComponentId::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| BomError::UnknownComponent(key.to_string()))
    }
}

/// 物料類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 包材
    Packaging,
    /// 內容物
    Content,
    /// 配件
    Accessory,
}

/// 物料定義（靜態目錄項）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDefinition {
    /// 物料ID
    pub id: ComponentId,

    /// 顯示名稱
    pub name: &'static str,

    /// 類別
    pub category: Category,

    /// 預設最小訂購量
    pub default_moq: Decimal,

    /// 預設單價
    pub default_cost: Decimal,
}

impl ComponentDefinition {
    /// 目錄預設的採購參數
    pub fn default_setting(&self) -> ComponentSetting {
        ComponentSetting::new(self.default_moq, self.default_cost)
    }
}

/// 物料目錄（順序即顯示順序）
pub static COMPONENT_DEFINITIONS: [ComponentDefinition; 10] = [
    ComponentDefinition {
        id: ComponentId::GiftBox8,
        name: "8片装-精品礼盒 (含内衬/说明书)",
        category: Category::Packaging,
        default_moq: dec!(500),
        default_cost: dec!(15.0),
    },
    ComponentDefinition {
        id: ComponentId::FoldingBox2,
        name: "2片装-小折盒 (含内衬/说明书)",
        category: Category::Packaging,
        default_moq: dec!(1000),
        default_cost: dec!(3.5),
    },
    ComponentDefinition {
        id: ComponentId::FoilBag,
        name: "铝箔袋",
        category: Category::Packaging,
        default_moq: dec!(10000),
        default_cost: dec!(0.5),
    },
    ComponentDefinition {
        id: ComponentId::BlisterTray,
        name: "吸塑托盘",
        category: Category::Packaging,
        default_moq: dec!(5000),
        default_cost: dec!(0.8),
    },
    ComponentDefinition {
        id: ComponentId::DolphinPatch,
        name: "海豚贴 (对)",
        category: Category::Content,
        default_moq: dec!(2000),
        default_cost: dec!(2.0),
    },
    ComponentDefinition {
        id: ComponentId::EssenceLiquid,
        name: "精华液 (支/料体)",
        category: Category::Content,
        default_moq: dec!(5000),
        default_cost: dec!(4.0),
    },
    ComponentDefinition {
        id: ComponentId::EssenceBottle,
        name: "精华瓶 (包材)",
        category: Category::Packaging,
        default_moq: dec!(5000),
        default_cost: dec!(1.2),
    },
    ComponentDefinition {
        id: ComponentId::WaistSeal,
        name: "腰封",
        category: Category::Accessory,
        default_moq: dec!(1000),
        default_cost: dec!(0.3),
    },
    ComponentDefinition {
        id: ComponentId::ExpCard,
        name: "小实验卡片",
        category: Category::Accessory,
        default_moq: dec!(1000),
        default_cost: dec!(0.2),
    },
    ComponentDefinition {
        id: ComponentId::StickerRound,
        name: "哑金圆形贴纸",
        category: Category::Accessory,
        default_moq: dec!(5000),
        default_cost: dec!(0.1),
    },
];

/// 取得完整物料目錄
pub fn catalog() -> &'static [ComponentDefinition] {
    &COMPONENT_DEFINITIONS
}

/// 成品組合類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleType {
    /// 8片裝精品禮盒（A 型）
    Set8,
    /// 2片裝小折盒（B 型）
    Set2,
}

/// 單位成品的物料用量表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioTable {
    entries: &'static [(ComponentId, u32)],
}

static RATIO_SET_8: [(ComponentId, u32); 10] = [
    (ComponentId::GiftBox8, 1),
    (ComponentId::FoldingBox2, 0),
    (ComponentId::FoilBag, 8),
    (ComponentId::BlisterTray, 8),
    (ComponentId::DolphinPatch, 8),
    (ComponentId::EssenceLiquid, 16),
    (ComponentId::EssenceBottle, 16),
    (ComponentId::WaistSeal, 1),
    (ComponentId::ExpCard, 1),
    (ComponentId::StickerRound, 1),
];

static RATIO_SET_2: [(ComponentId, u32); 10] = [
    (ComponentId::GiftBox8, 0),
    (ComponentId::FoldingBox2, 1),
    (ComponentId::FoilBag, 2),
    (ComponentId::BlisterTray, 2),
    (ComponentId::DolphinPatch, 2),
    (ComponentId::EssenceLiquid, 4),
    (ComponentId::EssenceBottle, 4),
    (ComponentId::WaistSeal, 0),
    (ComponentId::ExpCard, 1),
    (ComponentId::StickerRound, 1),
];

impl RatioTable {
    /// 取得某成品類型的用量表
    pub fn for_bundle(bundle: BundleType) -> Self {
        match bundle {
            BundleType::Set8 => Self { entries: &RATIO_SET_8 },
            BundleType::Set2 => Self { entries: &RATIO_SET_2 },
        }
    }

    /// 單位用量（表中不存在時為 0）
    pub fn quantity(&self, id: ComponentId) -> u32 {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, qty)| *qty)
            .unwrap_or(0)
    }

    /// 依表中順序列出所有用量
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, u32)> + '_ {
        self.entries.iter().copied()
    }
}

/// 某物料在某成品類型中的單位用量
pub fn ratio(bundle: BundleType, id: ComponentId) -> u32 {
    RatioTable::for_bundle(bundle).quantity(id)
}
