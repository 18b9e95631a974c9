use std::fmt;

use serde::{Deserialize, Serialize};

use crate::visualization::status::Status;

/// 可独立折叠的三个阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Planning,
    Execution,
    Evaluation,
}

impl StageKind {
    pub const ALL: [StageKind; 3] = [StageKind::Planning, StageKind::Execution, StageKind::Evaluation];

    pub fn title(&self) -> &'static str {
        match self {
            StageKind::Planning => "Planning Stage",
            StageKind::Execution => "Execution Stage",
            StageKind::Evaluation => "Evaluation Stage",
        }
    }

    fn index(&self) -> usize {
        match self {
            StageKind::Planning => 0,
            StageKind::Execution => 1,
            StageKind::Evaluation => 2,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Planning => write!(f, "planning"),
            StageKind::Execution => write!(f, "execution"),
            StageKind::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// 行首标记：计划阶段为序号，执行阶段为箭头
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Numbered(usize),
    Arrow,
    None,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Numbered(n) => write!(f, "({})", n),
            Marker::Arrow => write!(f, "→"),
            Marker::None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub title: String,
    pub details: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageLine {
    pub marker: Marker,
    pub step: ProcessStep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub kind: StageKind,
    pub lines: Vec<StageLine>,
    /// 仅评估阶段有 Key Learnings 列表
    pub lessons: Option<Vec<String>>,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

/// 各阶段展开/折叠状态，只影响渲染，不持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    expanded: [bool; 3],
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            expanded: [true, false, false],
        }
    }
}

impl SectionState {
    pub fn all_expanded() -> Self {
        Self { expanded: [true; 3] }
    }

    pub fn is_expanded(&self, kind: StageKind) -> bool {
        self.expanded[kind.index()]
    }

    pub fn set_expanded(&mut self, kind: StageKind, expanded: bool) {
        self.expanded[kind.index()] = expanded;
    }

    pub fn toggle(&mut self, kind: StageKind) {
        let slot = &mut self.expanded[kind.index()];
        *slot = !*slot;
    }
}
