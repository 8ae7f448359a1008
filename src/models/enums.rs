//! 枚举定义宏
//!
//! 字符串枚举与数据库中的取值一一对应；整数枚举按 TINYINT 存储。

/// 定义字符串枚举
///
/// 自动生成：
/// - enum 定义（serde 按数据库取值序列化）
/// - `VALUES` 常量 - 全部合法取值
/// - as_str() 方法
/// - Display / FromStr
macro_rules! define_str_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $value)] $variant,)+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!(
                        "无效的{}取值: '{s}'. 支持: {}",
                        stringify!($name),
                        Self::VALUES.join(", ")
                    )),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

/// 定义整数枚举
macro_rules! define_int_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub const VALUES: &'static [i32] = &[$($value),+];

            pub fn code(&self) -> i32 {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = String;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!("无效的{}取值: {code}", stringify!($name))),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }
    };
}

pub(crate) use define_int_enum;
pub(crate) use define_str_enum;
