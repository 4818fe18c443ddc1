//! 别名实体模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 别名的赋值方式，持久化为整数 (0 = 覆盖, 1 = 追加)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AliasMode {
    /// 直接替换变量值
    #[default]
    Overwrite,
    /// 合并到 `;` 分隔的列表最前面
    Append,
}

impl From<AliasMode> for u8 {
    fn from(mode: AliasMode) -> Self {
        match mode {
            AliasMode::Overwrite => 0,
            AliasMode::Append => 1,
        }
    }
}

impl TryFrom<u8> for AliasMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AliasMode::Overwrite),
            1 => Ok(AliasMode::Append),
            other => Err(format!("无效的别名类型: {} (可选 0=覆盖, 1=追加)", other)),
        }
    }
}

impl FromStr for AliasMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "overwrite" => Ok(AliasMode::Overwrite),
            "1" | "append" => Ok(AliasMode::Append),
            other => Err(format!(
                "无效的别名类型: {} (可选 0/overwrite, 1/append)",
                other
            )),
        }
    }
}

impl fmt::Display for AliasMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// 别名：一条具名的环境变量赋值规则
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alias {
    #[serde(rename = "alias")]
    pub name: String,
    #[serde(rename = "desc", default)]
    pub short_desc: String,
    #[serde(rename = "longDesc", alias = "longdesc", default)]
    pub long_desc: String,
    #[serde(rename = "type", default)]
    pub mode: AliasMode,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl Alias {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        mode: AliasMode,
    ) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            value: value.into(),
            mode,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_desc(mut self, short_desc: impl Into<String>, long_desc: impl Into<String>) -> Self {
        self.short_desc = short_desc.into();
        self.long_desc = long_desc.into();
        self
    }
}

/// 别名列表，保持插入顺序，`name` 唯一
///
/// 反序列化经过 `add`，文件中重复的别名以最后一条为准。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Alias>", into = "Vec<Alias>")]
pub struct AliasList(Vec<Alias>);

impl AliasList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增或修改别名
    ///
    /// 返回 `true` 表示新增，`false` 表示原位替换了同名别名
    pub fn add(&mut self, alias: Alias) -> bool {
        match self.index_of(&alias.name) {
            Some(idx) => {
                self.0[idx] = alias;
                false
            }
            None => {
                self.0.push(alias);
                true
            }
        }
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|a| a.name == name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Alias> {
        self.0.iter().find(|a| a.name == name)
    }

    /// 按别名精确匹配、按 key 子串匹配；空过滤条件匹配全部
    #[must_use]
    pub fn query(&self, name: &str, key: &str) -> Vec<Alias> {
        self.0
            .iter()
            .filter(|a| (name.is_empty() || a.name == name) && (key.is_empty() || a.key.contains(key)))
            .cloned()
            .collect()
    }

    /// 删除别名，其余元素顺序不变
    pub fn remove(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alias> {
        self.0.iter()
    }
}

impl From<Vec<Alias>> for AliasList {
    fn from(aliases: Vec<Alias>) -> Self {
        let mut list = AliasList::new();
        for alias in aliases {
            list.add(alias);
        }
        list
    }
}

impl From<AliasList> for Vec<Alias> {
    fn from(list: AliasList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a AliasList {
    type Item = &'a Alias;
    type IntoIter = std::slice::Iter<'a, Alias>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
