//! Averaged metric reporting
//!
//! One reporting window is a run of `step` consumed batches with per-metric
//! running sums. [`display`] prints the window's means on a single line and
//! optionally records them as scalar events.

use crate::model::Summary;
use crate::summary::SummaryWriter;

/// Print averaged metrics for a reporting window
///
/// Each mean is `sum / step`. The printed line is prefixed by the global
/// step: `[step: N] name: 1.2345 ...`. With a writer present, every mean
/// is also recorded as `{collection}/{name}` at `global_step`, and the
/// optional summary blob is forwarded under the same step.
///
/// Callers only invoke this after at least one step; `step == 0` yields
/// NaN means by construction.
pub fn display(
    global_step: usize,
    step: usize,
    metrics: &[(&str, f32)],
    collection: &str,
    summary: Option<&Summary>,
    writer: Option<&mut (dyn SummaryWriter + '_)>,
) {
    let mut line = format!("[step: {global_step}]");
    for (name, sum) in metrics {
        line.push_str(&format!(" {}: {:.4}", name, sum / step as f32));
    }
    println!("{line}");

    if let Some(w) = writer {
        for (name, sum) in metrics {
            w.add_scalar(
                &format!("{collection}/{name}"),
                sum / step as f32,
                global_step,
            );
        }
        if let Some(s) = summary {
            w.add_summary(s, global_step);
        }
    }
}
