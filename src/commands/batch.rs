//! # batch 子命令实现
//!
//! 扫描基准目录树，对每个运行目录并行执行比较流水线，
//! 汇总成功/跳过/失败统计。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/` 模块进行目录收集与并行执行
//! - 复用 `commands/compare.rs` 的流水线

use crate::batch::{BatchRunner, ProcessResult, RunCollector};
use crate::cli::batch::BatchArgs;
use crate::commands::compare::{figure_path, run_compare, CompareOptions};
use crate::error::{LwbenchError, Result};
use crate::parsers::{self, PARAMS_FILE};
use crate::utils::output;

use std::fs;
use std::path::PathBuf;

/// 执行批量比较
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Benchmark Comparison");

    if !args.root_dir.is_dir() {
        return Err(LwbenchError::DirectoryNotFound {
            path: args.root_dir.display().to_string(),
        });
    }

    let run_dirs = RunCollector::new(args.root_dir.clone()).collect();
    if run_dirs.is_empty() {
        output::print_warning(&format!(
            "No run directories with '{}' found under '{}'",
            PARAMS_FILE,
            args.root_dir.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} run directories", run_dirs.len()));
    output::print_info(&format!("Output format: {}", args.format));

    let results_dir = args
        .results_dir
        .unwrap_or_else(|| args.root_dir.join("results"));
    fs::create_dir_all(&results_dir).map_err(|e| LwbenchError::FileWriteError {
        path: results_dir.display().to_string(),
        source: e,
    })?;

    let options = CompareOptions {
        results_dir,
        format: args.format,
        width: args.width,
        height: args.height,
        export_csv: args.export_csv,
        verbose: false,
    };

    let runner = BatchRunner::new(args.jobs);
    let overwrite = args.overwrite;
    let result = runner.run(run_dirs, |dir| process_run_dir(dir, &options, overwrite));

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed runs:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理单个运行目录
fn process_run_dir(
    run_dir: &PathBuf,
    options: &CompareOptions,
    overwrite: bool,
) -> ProcessResult {
    // 图像名取决于运行参数，先解析参数做存在性检查
    let params = match parsers::parse_params_file(&run_dir.join(PARAMS_FILE)) {
        Ok(p) => p,
        Err(e) => return ProcessResult::Failed(run_dir.display().to_string(), e.to_string()),
    };

    let target = figure_path(&params, options);
    if target.exists() && !overwrite {
        return ProcessResult::Skipped(format!("Figure exists, skipping: {}", target.display()));
    }

    match run_compare(run_dir, options) {
        Ok(path) => ProcessResult::Success(format!(
            "{} -> {}",
            run_dir.display(),
            path.display()
        )),
        Err(e) => ProcessResult::Failed(run_dir.display().to_string(), e.to_string()),
    }
}
