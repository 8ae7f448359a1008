//! 关联声明与解析后的关系记录

/// 关联种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// 外键在源表
    BelongsTo,
    /// 外键在目标表，至多一行
    HasOne,
    /// 外键在目标表
    HasMany,
    /// 经由关联表
    BelongsToMany,
}

/// 启动阶段的关联声明，键名为逻辑属性名
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    pub kind: RelationKind,
    pub source: &'static str,
    pub target: &'static str,
    pub alias: &'static str,
    pub foreign_key: Option<&'static str>,
    /// BelongsTo 的目标键 / HasMany、HasOne 的源键，默认主键
    pub key: Option<&'static str>,
    pub through: Option<&'static str>,
    pub other_key: Option<&'static str>,
    pub constraints: bool,
}

impl Association {
    fn new(kind: RelationKind, source: &'static str, target: &'static str) -> Self {
        Self {
            kind,
            source,
            target,
            alias: "",
            foreign_key: None,
            key: None,
            through: None,
            other_key: None,
            constraints: true,
        }
    }

    pub fn belongs_to(source: &'static str, target: &'static str) -> Self {
        Self::new(RelationKind::BelongsTo, source, target)
    }

    pub fn has_one(source: &'static str, target: &'static str) -> Self {
        Self::new(RelationKind::HasOne, source, target)
    }

    pub fn has_many(source: &'static str, target: &'static str) -> Self {
        Self::new(RelationKind::HasMany, source, target)
    }

    pub fn belongs_to_many(
        source: &'static str,
        target: &'static str,
        through: &'static str,
    ) -> Self {
        let mut association = Self::new(RelationKind::BelongsToMany, source, target);
        association.through = Some(through);
        association
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.alias = alias;
        self
    }

    pub fn foreign_key(mut self, foreign_key: &'static str) -> Self {
        self.foreign_key = Some(foreign_key);
        self
    }

    pub fn key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    pub fn other_key(mut self, other_key: &'static str) -> Self {
        self.other_key = Some(other_key);
        self
    }

    /// 仅作说明的外键，严格模式下同样不校验
    pub fn without_constraints(mut self) -> Self {
        self.constraints = false;
        self
    }
}

/// 解析后的关系，表名与列名均为物理名
#[derive(Debug, Clone, PartialEq)]
pub struct RelationDef {
    pub kind: RelationKind,
    pub alias: String,
    pub source_table: String,
    pub target_table: String,
    /// BelongsTo: 源表列；HasMany/HasOne: 目标表列；BelongsToMany: 关联表指向源的列
    pub foreign_key: String,
    /// 源表上参与连接的列
    pub source_key: String,
    /// 目标表上参与连接的列
    pub target_key: String,
    pub through_table: Option<String>,
    /// 关联表指向目标的列
    pub other_key: Option<String>,
    pub constraints: bool,
    /// 目标列表的排序列
    pub order_by: Option<String>,
}
