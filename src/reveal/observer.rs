use super::{Region, RevealFlags};
use serde::Deserialize;

const OBSERVER_HANDLE: &str = "window.__portfolioReveal";

/// Message posted back by the observer script for each intersection change.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IntersectionReport {
    pub region: String,
    pub ratio: f64,
    pub intersecting: bool,
}

impl IntersectionReport {
    pub fn region(&self) -> Option<Region> {
        Region::from_id(&self.region)
    }
}

/// Whether the observer loop should keep listening after a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Done,
}

/// Applies one report to `flags`. Reports for unknown or already revealed
/// regions change nothing. Returns [`Watch::Done`] once every region is
/// revealed.
pub fn apply_report(flags: &mut RevealFlags, report: &IntersectionReport, threshold: f64) -> Watch {
    match report.region() {
        Some(region) if !flags.is_revealed(region) => {
            flags.observe(region, report.ratio, report.intersecting, threshold);
        }
        Some(_) => {}
        None => tracing::warn!(region = %report.region, "report for unknown region"),
    }

    if flags.pending().next().is_none() {
        Watch::Done
    } else {
        Watch::Continue
    }
}

/// Observer script for the regions of `flags` still hidden, or `None` when
/// there is nothing left to watch.
pub fn watch_script(flags: &RevealFlags, threshold: f64) -> Option<String> {
    let pending: Vec<Region> = flags.pending().collect();
    if pending.is_empty() {
        None
    } else {
        Some(observer_script(pending, threshold))
    }
}

/// Script that watches the given regions with an `IntersectionObserver` and
/// reports every change through `dioxus.send`. A region is unobserved once
/// it reaches `threshold`. Any observer left from a previous mount is
/// disconnected first.
pub fn observer_script(regions: impl IntoIterator<Item = Region>, threshold: f64) -> String {
    let ids: Vec<&str> = regions.into_iter().map(Region::id).collect();
    let ids = serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"
if ({handle}) {{
    {handle}.disconnect();
}}
const threshold = {threshold};
const observer = new IntersectionObserver((entries) => {{
    entries.forEach((entry) => {{
        dioxus.send({{
            region: entry.target.id,
            ratio: entry.intersectionRatio,
            intersecting: entry.isIntersecting,
        }});
        if (entry.isIntersecting && entry.intersectionRatio >= threshold) {{
            observer.unobserve(entry.target);
        }}
    }});
}}, {{ threshold }});
{ids}.forEach((id) => {{
    const section = document.getElementById(id);
    if (section) {{
        observer.observe(section);
    }} else {{
        console.warn('[portfolio] reveal region not found:', id);
    }}
}});
{handle} = observer;
"#,
        handle = OBSERVER_HANDLE,
        threshold = threshold,
        ids = ids,
    )
}

/// Script that tears down the observer installed by [`observer_script`].
pub fn disconnect_script() -> String {
    format!(
        r#"
if ({handle}) {{
    {handle}.disconnect();
    {handle} = undefined;
}}
"#,
        handle = OBSERVER_HANDLE,
    )
}
