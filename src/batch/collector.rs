//! # 运行目录收集器
//!
//! 在基准目录树中查找运行目录：任何直接包含参数文件
//! (`run.params`) 的目录都视为一个独立运行。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::parsers::PARAMS_FILE;

use std::path::PathBuf;
use walkdir::WalkDir;

/// 运行目录收集器
pub struct RunCollector {
    /// 基准树根目录
    root: PathBuf,
    /// 参数文件名
    params_name: String,
}

impl RunCollector {
    /// 创建新的收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            params_name: PARAMS_FILE.to_string(),
        }
    }

    /// 收集全部运行目录（按路径排序，保证批量输出顺序稳定）
    pub fn collect(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_type().is_file()
                    && e.file_name().to_string_lossy() == self.params_name
            })
            .filter_map(|e| e.path().parent().map(|p| p.to_path_buf()))
            .collect();

        dirs.sort();
        dirs.dedup();
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collects_nested_run_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("Al/E00300keV/th000deg");
        let b = tmp.path().join("Fe/E01000keV/th060deg");
        let empty = tmp.path().join("Ta/E00300keV");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::create_dir_all(&empty).unwrap();
        fs::write(a.join(PARAMS_FILE), "ENERGY = 3e5\n").unwrap();
        fs::write(b.join(PARAMS_FILE), "ENERGY = 1e6\n").unwrap();

        let dirs = RunCollector::new(tmp.path().to_path_buf()).collect();
        assert_eq!(dirs, vec![a, b]);
    }

    #[test]
    fn test_empty_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = RunCollector::new(tmp.path().to_path_buf()).collect();
        assert!(dirs.is_empty());
    }
}
