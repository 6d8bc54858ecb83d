//! Encounter placement
//!
//! Decides where world-one encounters sit. A JSON document can pick one of
//! three modes:
//!
//! - `random`: spread-out random points away from the centre spawn
//! - `grid`: a near-square grid
//! - `explicit`: fixed ratios with a kind and character per entry
//!
//! Every position is produced in reference-size pixels so the normalizer maps
//! it back consistently. The caller owns file access and logging; this module
//! only reports which [`PlacementSource`] produced the result.

use serde::Deserialize;

use crate::encounter::Encounter;
use crate::rng::SimpleRng;
use crate::types::{Difficulty, Size, Vec2};

pub const DEFAULT_ENCOUNTER_COUNT: usize = 5;
/// Upper bound on generated encounters; larger counts are clamped.
pub const MAX_ENCOUNTERS: usize = 64;
pub const MARGIN: f32 = 80.0;
pub const MIN_DISTANCE: f32 = 120.0;
pub const CENTER_KEEP_OUT: f32 = 150.0;
const ATTEMPTS_PER_ENCOUNTER: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    #[default]
    Random,
    Grid,
    Explicit,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExplicitPosition {
    #[serde(default = "half")]
    pub x_ratio: f32,
    #[serde(default = "half")]
    pub y_ratio: f32,
    #[serde(rename = "type", default = "dialogue_type")]
    pub kind: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

fn half() -> f32 {
    0.5
}

fn dialogue_type() -> String {
    "dialogue".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlacementConfig {
    #[serde(default)]
    pub placement_mode: PlacementMode,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub explicit_positions: Vec<ExplicitPosition>,
}

fn default_count() -> usize {
    DEFAULT_ENCOUNTER_COUNT
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            placement_mode: PlacementMode::Random,
            count: DEFAULT_ENCOUNTER_COUNT,
            explicit_positions: Vec::new(),
        }
    }
}

impl PlacementConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Layout used when a config exists but cannot be parsed.
    pub fn fallback() -> Self {
        let entry = |x, y, kind: &str, character: Option<&str>, id: &str| ExplicitPosition {
            x_ratio: x,
            y_ratio: y,
            kind: kind.to_string(),
            character: character.map(str::to_string),
            id: Some(id.to_string()),
        };
        Self {
            placement_mode: PlacementMode::Explicit,
            count: 3,
            explicit_positions: vec![
                entry(0.25, 0.35, "dialogue", Some("Mysterious Stranger"), "enc0"),
                entry(0.75, 0.6, "minigame", None, "enc1"),
                entry(0.5, 0.8, "dialogue", Some("Lost Robot"), "enc2"),
            ],
        }
    }
}

/// Where a placement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementSource {
    ConfigFile,
    Default,
    Fallback,
}

impl PlacementSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementSource::ConfigFile => "config_file",
            PlacementSource::Default => "default",
            PlacementSource::Fallback => "fallback",
        }
    }
}

/// Resolve the raw config text (if any) to a config and its source.
pub fn resolve_config(text: Option<&str>) -> (PlacementConfig, PlacementSource) {
    match text {
        None => (PlacementConfig::default(), PlacementSource::Default),
        Some(text) => match PlacementConfig::from_json(text) {
            Ok(cfg) => (cfg, PlacementSource::ConfigFile),
            Err(_) => (PlacementConfig::fallback(), PlacementSource::Fallback),
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEncounter {
    pub encounter: Encounter,
    /// Reference-space pixels.
    pub position: Vec2,
}

/// Generate encounters in `reference` space.
pub fn generate(cfg: &PlacementConfig, reference: Size, rng: &mut SimpleRng) -> Vec<PlacedEncounter> {
    if cfg.placement_mode == PlacementMode::Explicit && !cfg.explicit_positions.is_empty() {
        return cfg
            .explicit_positions
            .iter()
            .take(MAX_ENCOUNTERS)
            .enumerate()
            .map(|(i, p)| explicit_encounter(i, p, reference))
            .collect();
    }

    let count = cfg.count.min(MAX_ENCOUNTERS);
    let points = match cfg.placement_mode {
        PlacementMode::Grid => grid_positions(reference, count),
        _ => random_positions(reference, count, rng),
    };

    points
        .into_iter()
        .enumerate()
        .map(|(i, position)| PlacedEncounter {
            encounter: generated_encounter(i),
            position,
        })
        .collect()
}

fn explicit_encounter(i: usize, p: &ExplicitPosition, reference: Size) -> PlacedEncounter {
    let id = p.id.clone().unwrap_or_else(|| format!("enc_exp_{}", i));
    let encounter = match p.kind.as_str() {
        "minigame" => Encounter::shooter(id, difficulty_cycle(i)),
        _ => Encounter::dialogue(id, p.character.as_deref().unwrap_or("Stranger")),
    };
    PlacedEncounter {
        encounter,
        position: Vec2::new(
            (reference.width as f32 * p.x_ratio).round(),
            (reference.height as f32 * p.y_ratio).round(),
        ),
    }
}

/// Even slots talk, odd slots fight.
fn generated_encounter(i: usize) -> Encounter {
    let id = format!("enc{}", i);
    if i % 2 == 0 {
        let character = if i % 3 == 0 { "Strange One" } else { "Wanderer" };
        Encounter::dialogue(id, character)
    } else {
        Encounter::shooter(id, difficulty_cycle(i))
    }
}

fn difficulty_cycle(i: usize) -> Difficulty {
    match (i / 2) % 3 {
        0 => Difficulty::Easy,
        1 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

pub fn random_positions(reference: Size, count: usize, rng: &mut SimpleRng) -> Vec<Vec2> {
    let count = count.min(MAX_ENCOUNTERS);
    let w = reference.width as f32;
    let h = reference.height as f32;
    let center = reference.center();
    let mut pts: Vec<Vec2> = Vec::with_capacity(count);
    let mut attempts = 0;

    let sample = |rng: &mut SimpleRng| {
        Vec2::new(
            rng.next_f32_range(MARGIN, w - MARGIN),
            rng.next_f32_range(MARGIN, h - MARGIN),
        )
    };

    while pts.len() < count && attempts < count.saturating_mul(ATTEMPTS_PER_ENCOUNTER) {
        attempts += 1;
        let p = sample(rng);
        let crowded = pts.iter().any(|q| q.distance(p) < MIN_DISTANCE);
        let near_spawn = p.distance(center) < CENTER_KEEP_OUT;
        if !crowded && !near_spawn {
            pts.push(p);
        }
    }

    while pts.len() < count {
        pts.push(sample(rng));
    }

    pts.into_iter()
        .map(|p| Vec2::new(p.x.trunc(), p.y.trunc()))
        .collect()
}

pub fn grid_positions(reference: Size, count: usize) -> Vec<Vec2> {
    let count = count.min(MAX_ENCOUNTERS);
    let cols = ((count as f32).sqrt() + 0.5) as usize;
    let cols = cols.max(1);
    let rows = count.div_ceil(cols);
    let x_step = reference.width as f32 / (cols + 1) as f32;
    let y_step = reference.height as f32 / (rows + 1) as f32;

    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .take(count)
        .map(|(r, c)| Vec2::new((c + 1) as f32 * x_step, (r + 1) as f32 * y_step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::{EncounterKind, MinigameKind};

    #[test]
    fn missing_config_is_default_random_five() {
        let (cfg, source) = resolve_config(None);
        assert_eq!(source, PlacementSource::Default);
        assert_eq!(cfg.placement_mode, PlacementMode::Random);
        assert_eq!(cfg.count, 5);
    }

    #[test]
    fn malformed_config_uses_fallback() {
        let (cfg, source) = resolve_config(Some("{ not json"));
        assert_eq!(source, PlacementSource::Fallback);
        let placed = generate(&cfg, Size::new(1000, 1000), &mut SimpleRng::new(1));
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[0].encounter.id, "enc0");
        assert_eq!(placed[0].position, Vec2::new(250.0, 350.0));
        assert_eq!(placed[2].encounter.kind.title(), "Lost Robot");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let (cfg, source) = resolve_config(Some(r#"{"placement_mode":"grid"}"#));
        assert_eq!(source, PlacementSource::ConfigFile);
        assert_eq!(cfg.placement_mode, PlacementMode::Grid);
        assert_eq!(cfg.count, 5);
    }

    #[test]
    fn explicit_entry_without_id_gets_indexed_id() {
        let cfg = PlacementConfig::from_json(
            r#"{"placement_mode":"explicit","explicit_positions":[{"x_ratio":0.1,"y_ratio":0.2}]}"#,
        )
        .unwrap();
        let placed = generate(&cfg, Size::new(1280, 720), &mut SimpleRng::new(1));
        assert_eq!(placed[0].encounter.id, "enc_exp_0");
        assert_eq!(placed[0].encounter.kind.title(), "Stranger");
    }

    #[test]
    fn grid_layout_is_near_square() {
        let pts = grid_positions(Size::new(1200, 900), 5);
        assert_eq!(pts.len(), 5);
        // cols = round(sqrt(5)) = 2, rows = 3
        assert_eq!(pts[0], Vec2::new(400.0, 225.0));
        assert_eq!(pts[1], Vec2::new(800.0, 225.0));
        assert_eq!(pts[4], Vec2::new(400.0, 675.0));
        assert!(grid_positions(Size::new(100, 100), 0).is_empty());
    }

    #[test]
    fn random_points_respect_margin() {
        let reference = Size::new(1280, 720);
        let mut rng = SimpleRng::new(42);
        let pts = random_positions(reference, 5, &mut rng);
        assert_eq!(pts.len(), 5);
        for p in &pts {
            assert!(p.x >= MARGIN && p.x <= 1280.0 - MARGIN);
            assert!(p.y >= MARGIN && p.y <= 720.0 - MARGIN);
        }
    }

    #[test]
    fn crowded_request_still_fills_count() {
        let mut rng = SimpleRng::new(9);
        let pts = random_positions(Size::new(400, 400), 20, &mut rng);
        assert_eq!(pts.len(), 20);
    }

    #[test]
    fn generated_kinds_alternate() {
        let cfg = PlacementConfig {
            placement_mode: PlacementMode::Grid,
            count: 6,
            explicit_positions: Vec::new(),
        };
        let placed = generate(&cfg, Size::new(1280, 720), &mut SimpleRng::new(1));
        assert_eq!(placed[0].encounter.kind.title(), "Strange One");
        assert_eq!(placed[2].encounter.kind.title(), "Wanderer");
        let games: Vec<_> = placed
            .iter()
            .filter_map(|p| match &p.encounter.kind {
                EncounterKind::Minigame { game, .. } => Some(*game),
                _ => None,
            })
            .collect();
        assert_eq!(
            games,
            vec![
                MinigameKind::Shooter(Difficulty::Easy),
                MinigameKind::Shooter(Difficulty::Medium),
                MinigameKind::Shooter(Difficulty::Hard),
            ]
        );
    }

    #[test]
    fn huge_count_is_capped() {
        for mode in ["random", "grid"] {
            let text = format!(r#"{{"placement_mode":"{mode}","count":1000000000000000000}}"#);
            let (cfg, source) = resolve_config(Some(&text));
            assert_eq!(source, PlacementSource::ConfigFile);
            let placed = generate(&cfg, Size::new(1280, 720), &mut SimpleRng::new(3));
            assert_eq!(placed.len(), MAX_ENCOUNTERS, "{mode}");
        }
        let reference = Size::new(1280, 720);
        let random = random_positions(reference, usize::MAX, &mut SimpleRng::new(3));
        assert_eq!(random.len(), MAX_ENCOUNTERS);
        assert_eq!(grid_positions(reference, usize::MAX).len(), MAX_ENCOUNTERS);
    }
}
