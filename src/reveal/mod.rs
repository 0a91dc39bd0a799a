//! Scroll-triggered entrance animations.
//!
//! A region is revealed the first time enough of it scrolls into view. The
//! flag never goes back to hidden, so later intersection reports are no-ops.
mod observer;

pub use observer::{
    IntersectionReport, Watch, apply_report, disconnect_script, observer_script, watch_script,
};

use std::time::Duration;

/// Visible fraction of a region that triggers its reveal.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Skills,
    Education,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Skills, Region::Education];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Region::Skills => "skills",
            Region::Education => "education",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.id() == id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFlags {
    skills: bool,
    education: bool,
}

impl RevealFlags {
    pub fn is_revealed(&self, region: Region) -> bool {
        match region {
            Region::Skills => self.skills,
            Region::Education => self.education,
        }
    }

    /// Marks `region` revealed. Returns true only on the first call.
    pub fn reveal(&mut self, region: Region) -> bool {
        let slot = match region {
            Region::Skills => &mut self.skills,
            Region::Education => &mut self.education,
        };
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Applies one observer report. Returns true when it revealed the region.
    pub fn observe(
        &mut self,
        region: Region,
        ratio: f64,
        intersecting: bool,
        threshold: f64,
    ) -> bool {
        if !intersecting || ratio < threshold {
            return false;
        }
        let newly = self.reveal(region);
        if newly {
            tracing::info!(region = region.id(), ratio, "region revealed");
        }
        newly
    }

    /// Regions that still need observing.
    pub fn pending(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL
            .into_iter()
            .filter(move |region| !self.is_revealed(*region))
    }
}

/// CSS keyframe animation played by each item of a revealed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entrance {
    pub animation: &'static str,
    pub duration: Duration,
    /// Added to the delay of each successive item.
    pub stagger: Duration,
}

impl Entrance {
    pub const SKILLS: Entrance = Entrance {
        animation: "slideIn",
        duration: Duration::from_millis(500),
        stagger: Duration::from_millis(100),
    };

    pub const EDUCATION: Entrance = Entrance {
        animation: "slideInRight",
        duration: Duration::from_millis(500),
        stagger: Duration::from_millis(200),
    };

    pub const CERTIFICATIONS: Entrance = Entrance {
        animation: "slideInLeft",
        duration: Duration::from_millis(500),
        stagger: Duration::from_millis(200),
    };

    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    /// Inline style for the item at `index`. Items start invisible either
    /// way; revealed ones fade in and keep the final keyframe.
    pub fn style(&self, revealed: bool, index: usize) -> String {
        if revealed {
            format!(
                "opacity: 0; animation: {} {}s ease-out {}s forwards;",
                self.animation,
                format_secs(self.duration),
                format_secs(self.delay_for(index)),
            )
        } else {
            "opacity: 0; animation: none;".to_string()
        }
    }
}

fn format_secs(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    let text = format!("{secs:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() { "0".to_string() } else { text.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_ids_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_id(region.id()), Some(region));
        }
        assert_eq!(Region::from_id("projects"), None);
    }

    #[test]
    fn test_flags_start_hidden() {
        let flags = RevealFlags::default();
        assert!(!flags.is_revealed(Region::Skills));
        assert!(!flags.is_revealed(Region::Education));
        assert_eq!(flags.pending().count(), 2);
    }

    #[test]
    fn test_reveal_reports_first_transition_only() {
        let mut flags = RevealFlags::default();
        assert!(flags.reveal(Region::Skills));
        assert!(!flags.reveal(Region::Skills));
        assert!(flags.is_revealed(Region::Skills));
        assert!(!flags.is_revealed(Region::Education));
        assert_eq!(flags.pending().collect::<Vec<_>>(), vec![Region::Education]);
    }

    #[test]
    fn test_observe_below_threshold_keeps_hidden() {
        let mut flags = RevealFlags::default();
        assert!(!flags.observe(Region::Education, 0.05, true, DEFAULT_THRESHOLD));
        assert!(!flags.observe(Region::Education, 0.5, false, DEFAULT_THRESHOLD));
        assert!(!flags.is_revealed(Region::Education));
    }

    #[test]
    fn test_observe_at_threshold_reveals() {
        let mut flags = RevealFlags::default();
        assert!(flags.observe(Region::Education, 0.1, true, DEFAULT_THRESHOLD));
        assert!(flags.is_revealed(Region::Education));
    }

    #[test]
    fn test_leaving_viewport_does_not_hide() {
        let mut flags = RevealFlags::default();
        assert!(flags.observe(Region::Skills, 0.4, true, DEFAULT_THRESHOLD));
        assert!(!flags.observe(Region::Skills, 0.0, false, DEFAULT_THRESHOLD));
        assert!(!flags.observe(Region::Skills, 0.9, true, DEFAULT_THRESHOLD));
        assert!(flags.is_revealed(Region::Skills));
    }

    #[test]
    fn test_hidden_style_rests_invisible() {
        assert_eq!(Entrance::SKILLS.style(false, 3), "opacity: 0; animation: none;");
    }

    #[test]
    fn test_revealed_style_staggers_by_index() {
        assert_eq!(
            Entrance::SKILLS.style(true, 0),
            "opacity: 0; animation: slideIn 0.5s ease-out 0s forwards;"
        );
        assert_eq!(
            Entrance::SKILLS.style(true, 3),
            "opacity: 0; animation: slideIn 0.5s ease-out 0.3s forwards;"
        );
        assert_eq!(
            Entrance::EDUCATION.style(true, 1),
            "opacity: 0; animation: slideInRight 0.5s ease-out 0.2s forwards;"
        );
        assert_eq!(
            Entrance::CERTIFICATIONS.style(true, 1),
            "opacity: 0; animation: slideInLeft 0.5s ease-out 0.2s forwards;"
        );
    }

    #[test]
    fn test_format_secs() {
        assert_eq!(format_secs(Duration::ZERO), "0");
        assert_eq!(format_secs(Duration::from_millis(1500)), "1.5");
        assert_eq!(format_secs(Duration::from_secs(2)), "2");
        assert_eq!(format_secs(Duration::from_millis(1100)), "1.1");
    }
}
