use std::path::PathBuf;
use std::str::FromStr;

/// 同名文件处理策略
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// 直接覆盖已有文件
    Overwrite,
    /// 目标已存在时报错
    Fail,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            "fail" => Ok(CollisionPolicy::Fail),
            other => Err(format!("未知的同名文件策略: {}", other)),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目 TOML 文件存放目录
    pub problems_folder: PathBuf,
    /// 笔记本输出目录
    pub output_dir: PathBuf,
    /// 同名文件处理策略
    pub collision_policy: CollisionPolicy,
    /// 是否先写临时文件再重命名
    pub atomic_write: bool,
    /// 写入 language_info 的 Python 版本
    pub python_version: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problems_folder: PathBuf::from("problems"),
            output_dir: PathBuf::from("Stack"),
            collision_policy: CollisionPolicy::Overwrite,
            atomic_write: true,
            python_version: "3.13.3".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源构建配置，无法解析的值回退到默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Self {
            problems_folder: lookup("PROBLEMS_FOLDER")
                .map(PathBuf::from)
                .unwrap_or(default.problems_folder),
            output_dir: lookup("NOTEBOOK_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.output_dir),
            collision_policy: lookup("COLLISION_POLICY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.collision_policy),
            atomic_write: lookup("ATOMIC_WRITE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.atomic_write),
            python_version: lookup("KERNEL_PYTHON_VERSION").unwrap_or(default.python_version),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.output_dir, PathBuf::from("Stack"));
        assert_eq!(config.collision_policy, CollisionPolicy::Overwrite);
        assert!(config.atomic_write);
        assert_eq!(config.python_version, "3.13.3");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("NOTEBOOK_OUTPUT_DIR", "out"),
            ("COLLISION_POLICY", "FAIL"),
            ("ATOMIC_WRITE", "false"),
            ("VERBOSE_LOGGING", "true"),
        ]));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.collision_policy, CollisionPolicy::Fail);
        assert!(!config.atomic_write);
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("COLLISION_POLICY", "rename"),
            ("ATOMIC_WRITE", "yes"),
        ]));
        assert_eq!(config.collision_policy, CollisionPolicy::Overwrite);
        assert!(config.atomic_write);
    }
}
