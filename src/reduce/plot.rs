//! # 比较图生成
//!
//! 使用 `plotters` 将模拟曲线与参考曲线叠加绘制为一张标注图。
//! 本层只做展示：不修改任何曲线数值，x 显示域固定为 [0,1]，
//! 域外的点自然不显示。
//!
//! ## 功能
//! - 每条曲线独立颜色、折线加数据点标记
//! - 图例、标题与坐标轴标注
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 调用
//! - 使用 `models/curve.rs` 的比较曲线
//! - 使用 `plotters` 渲染图表

use crate::error::{LwbenchError, Result};
use crate::models::ComparisonCurve;

use plotters::prelude::*;
use std::path::Path;

/// 曲线颜色循环表
const SERIES_COLORS: [RGBColor; 5] = [
    RGBColor(0, 102, 204),
    RGBColor(204, 51, 51),
    RGBColor(34, 139, 34),
    RGBColor(153, 51, 204),
    RGBColor(230, 126, 34),
];

/// 生成比较图
pub fn render_comparison_plot(
    curves: &[ComparisonCurve],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_comparison_chart(&root, curves, title)?;
        root.present()
            .map_err(|e| LwbenchError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_comparison_chart(&root, curves, title)?;
        root.present()
            .map_err(|e| LwbenchError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制比较图的核心逻辑
fn draw_comparison_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curves: &[ComparisonCurve],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| LwbenchError::Other(format!("{:?}", e)))?;

    // 纵轴范围由显示域内的数据决定
    let y_max = curves
        .iter()
        .flat_map(|c| c.points())
        .filter(|(x, _)| (0.0..=1.0).contains(x))
        .map(|(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = if y_max.is_finite() && y_max > 0.0 {
        y_max * 1.1
    } else {
        1.0
    };

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..1.0, 0.0..y_max)
        .map_err(|e| LwbenchError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Fraction of Mean Range")
        .y_desc("Energy Deposition (MeV/g/cm²)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| LwbenchError::Other(format!("{:?}", e)))?;

    for (i, curve) in curves.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];

        chart
            .draw_series(LineSeries::new(curve.points(), color.stroke_width(2)))
            .map_err(|e| LwbenchError::Other(format!("{:?}", e)))?
            .label(curve.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .draw_series(
                curve
                    .points()
                    .map(|(x, y)| Circle::new((x, y), 4, color.filled())),
            )
            .map_err(|e| LwbenchError::Other(format!("{:?}", e)))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(|e| LwbenchError::Other(format!("{:?}", e)))?;

    Ok(())
}
