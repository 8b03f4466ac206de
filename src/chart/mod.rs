//! Reveal-on-scroll charts, skill bars and counters
//!
//! Layout is computed separately from drawing so geometry can be checked
//! without a surface.

pub mod counter;
pub mod radar;
pub mod reveal;
pub mod skill_bar;

pub use counter::CounterTween;
pub use radar::{
    RadarChart, RadarConfig, RadarLayout, RadarStyle, SkillSample, default_skills, render_radar,
    spoke_angle,
};
pub use reveal::{REVEAL_THRESHOLD, Reveal};
pub use skill_bar::SkillBar;
