use std::path::{Path, PathBuf};
use bevy_utils::tracing::info;
use crate::core::coupling_point::CouplingPoint;
use crate::core::curve::Curve;
use crate::core::curve_params::{CurveParams, Domain};
use crate::core::generator_config::GeneratorConfig;
use crate::core::helix_error::{HelixError, HelixResult};
use crate::core::helix_spec::HelixSpec;
use crate::dynamics::hbar::{energy_profile, is_resonant, moment_of_inertia, normalize_by_max, structural_hbar};
use crate::dynamics::lagrangian::{frenet_lagrangian, heading_lagrangian};
use crate::generation::coupling::{coupling_network, find_coupling};
use crate::generation::helix::{generate, generate_helix, generate_on_domain, generate_with_sub_spin};
use crate::generation::helpers::{random_params, GenRng};
use crate::generation::transformation::{branch_curve, direction_from_angles, radial_field, BranchSpec};
use crate::management::scene_management::{import_scene_from, SCENE_DIRECTORY};
use crate::scenes::anchor::Anchor;
use crate::scenes::scene::Scene;
use crate::scenes::scene_output::{HbarReport, LabeledCurve, SceneOutput};

pub const MAX_SCENE_DEPTH: usize = 32;

/// State threaded through scene evaluation: configuration, the root random
/// source and the chain of scenes currently being resolved.
pub struct SceneContext {
    pub config: GeneratorConfig,
    pub gen_rng: GenRng,
    scene_dir: PathBuf,
    scene_stack: Vec<String>,
}

impl Default for SceneContext {
    fn default() -> Self {
        SceneContext::new(GeneratorConfig::default())
    }
}

impl SceneContext {
    pub fn new(config: GeneratorConfig) -> Self {
        SceneContext {
            gen_rng: GenRng::from_config(&config),
            config,
            scene_dir: PathBuf::from(SCENE_DIRECTORY),
            scene_stack: Vec::new(),
        }
    }

    pub fn with_scene_dir(mut self, scene_dir: impl Into<PathBuf>) -> Self {
        self.scene_dir = scene_dir.into();
        self
    }

    pub fn scene_dir(&self) -> &Path {
        &self.scene_dir
    }

    fn enter(&mut self, name: &str) -> HelixResult<()> {
        if self.scene_stack.iter().any(|s| s == name) {
            return Err(HelixError::CycleDetected(name.to_string()));
        }
        if self.scene_stack.len() >= MAX_SCENE_DEPTH {
            return Err(HelixError::Other(format!("Maximum scene depth exceeded while resolving {}", name)));
        }
        self.scene_stack.push(name.to_string());
        Ok(())
    }

    fn leave(&mut self) {
        self.scene_stack.pop();
    }
}

/// Imports `name` from the context's scene directory and evaluates it.
pub fn evaluate_by_name(name: &str, ctx: &mut SceneContext) -> HelixResult<SceneOutput> {
    if ctx.scene_stack.iter().any(|s| s == name) {
        return Err(HelixError::CycleDetected(name.to_string()));
    }
    let scene = import_scene_from(ctx.scene_dir(), name)?;
    evaluate(name, &scene, ctx)
}

pub fn evaluate(name: &str, scene: &Scene, ctx: &mut SceneContext) -> HelixResult<SceneOutput> {
    ctx.enter(name)?;
    let result = evaluate_scene(name, scene, ctx);
    ctx.leave();

    if let Ok(output) = &result {
        info!(
            "[Scene] {} ({}): {} curves, {} couplings, {} links",
            name,
            scene.variant_name(),
            output.curves.len(),
            output.couplings.len(),
            output.links.len()
        );
    }
    result
}

fn evaluate_scene(name: &str, scene: &Scene, ctx: &mut SceneContext) -> HelixResult<SceneOutput> {
    let mut output = SceneOutput::new(name);

    match scene {
        Scene::Projection { params, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            output.curves.push(LabeledCurve::new("projection", generate(params, n)?));
        }
        Scene::MultiProjection { params, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            output.curves = numbered_curves("p", params, n)?;
        }
        Scene::Coupling { first, second, domain, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let a = generate_on_domain(first, domain, n)?;
            let b = generate_on_domain(second, domain, n)?;
            output.couplings.push(find_coupling(&a, &b)?);
            output.curves.push(LabeledCurve::new("first", a));
            output.curves.push(LabeledCurve::new("second", b));
        }
        Scene::PostCoupling { original, partner, modified_pitch, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let a = generate(original, n)?;
            let b = generate_on_domain(partner, &original.spin_domain(), n)?;
            let coupling = find_coupling(&a, &b)?;

            // one turn from the coupling point with the new pitch
            let modified_params = CurveParams { spin: 1.0, ..original.with_pitch(*modified_pitch) };
            let modified = generate(&modified_params, n)?.translated(coupling.position);

            output.couplings.push(coupling);
            output.curves.push(LabeledCurve::new("original", a));
            output.curves.push(LabeledCurve::new("partner", b));
            output.curves.push(LabeledCurve::new("modified", modified));
        }
        Scene::ProjectiveSpace { ranges, count, seed, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let mut scene_rng = ctx.gen_rng.fork(seed);
            let params = random_params(ranges, *count, &mut scene_rng)?;
            output.curves = numbered_curves("p", &params, n)?;
        }
        Scene::RadialField { field, grid } => {
            let (rows, cols) = grid.grid_dimensions();
            output.surface = Some(radial_field(field, rows, cols)?);
        }
        Scene::Dispersion { anchor, branches, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let origin = resolve_anchor(anchor, ctx)?;
            let one_turn = Domain::turns(1.0);
            for (i, branch) in branches.iter().enumerate() {
                let curve = generate_on_domain(branch, &one_turn, n)?.translated(origin.position);
                output.curves.push(LabeledCurve::new(format!("branch{}", i + 1), curve));
            }
            output.couplings.push(origin);
        }
        Scene::ToroidalDispersion { anchor, branches, seed, polar_degrees, azimuth, torsion, spin, domain, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let origin = resolve_anchor(anchor, ctx)?;
            let mut scene_rng = ctx.gen_rng.fork(seed);
            for i in 0..*branches {
                let polar = polar_degrees.sample(&mut scene_rng)?.to_radians();
                let azimuth = azimuth.sample(&mut scene_rng)?;
                let branch = BranchSpec {
                    direction: direction_from_angles(polar, azimuth),
                    torsion: torsion.sample(&mut scene_rng)?,
                    spin: spin.sample(&mut scene_rng)?,
                    phase: i as f64,
                };
                let curve = branch_curve(&branch, origin.position, domain, n)?;
                output.curves.push(LabeledCurve::new(format!("branch{}", i + 1), curve));
            }
            output.couplings.push(origin);
        }
        Scene::HelixCoupling { first, second, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let a = generate_helix(first, n)?;
            let b = generate_helix(second, n)?;
            output.couplings.push(find_coupling(&a, &b)?);
            output.curves.push(LabeledCurve::new("first", a));
            output.curves.push(LabeledCurve::new("second", b));
        }
        Scene::DoubleRotation { params, sub_spin, phase_offset, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let a = generate_with_sub_spin(params, sub_spin, n)?;
            let shifted = sub_spin.with_phase(sub_spin.phase + phase_offset);
            let b = generate_with_sub_spin(params, &shifted, n)?;
            output.couplings.push(find_coupling(&a, &b)?);
            output.curves.push(LabeledCurve::new("first", a));
            output.curves.push(LabeledCurve::new("second", b));
        }
        Scene::StructuralHbar { motion, turns, ripple, ripple_frequency, partner_phase, partner_z_offset, resonance_window, sample_count } => {
            motion.validate()?;
            let n = ctx.config.samples_or_default(*sample_count);
            let spec = HelixSpec {
                radius: motion.radius,
                pitch: motion.pitch,
                turns: *turns,
                phase: motion.phase,
                z_offset: 0.0,
            };
            let helix = generate_helix(&spec, n)?;
            let partner = generate_helix(
                &HelixSpec { phase: motion.phase + partner_phase, z_offset: *partner_z_offset, ..spec },
                n,
            )?;

            let profile = energy_profile(motion, &spec.domain().linspace(n), *ripple, *ripple_frequency);
            output.hbar = Some(HbarReport {
                moment_of_inertia: moment_of_inertia(motion.mass, motion.radius),
                angular_frequency: motion.angular_frequency(),
                hbar: structural_hbar(motion)?,
                normalized_profile: normalize_by_max(&profile)?,
                energy_profile: profile,
                resonant: is_resonant(*partner_phase, *resonance_window),
            });
            output.curves.push(LabeledCurve::new("helix", helix));
            output.curves.push(LabeledCurve::new("partner", partner));
        }
        Scene::HeadingLagrangian { motion, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let (trajectory, energy) = heading_lagrangian(motion, n)?;
            output.curves.push(LabeledCurve::new("trajectory", trajectory));
            output.energy = Some(energy);
        }
        Scene::FrenetLagrangian { motion, velocity, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let analysis = frenet_lagrangian(motion, *velocity, n)?;
            output.curves.push(LabeledCurve::new("trajectory", analysis.position));
            output.derivatives.push(LabeledCurve::new("velocity", analysis.velocity));
            output.derivatives.push(LabeledCurve::new("acceleration", analysis.acceleration));
            output.energy = Some(analysis.energy);
        }
        Scene::CouplingNetwork { ranges, count, seed, threshold, sample_count } => {
            let n = ctx.config.samples_or_default(*sample_count);
            let mut scene_rng = ctx.gen_rng.fork(seed);
            let params = random_params(ranges, *count, &mut scene_rng)?;
            let curves = params
                .iter()
                .map(|p| generate(p, n))
                .collect::<HelixResult<Vec<Curve>>>()?;
            output.links = coupling_network(&curves, *threshold)?;
            output.curves = curves
                .into_iter()
                .enumerate()
                .map(|(i, curve)| LabeledCurve::new(format!("p{}", i + 1), curve))
                .collect();
        }
    }

    Ok(output)
}

/// Resolves an anchor to the point a dispersion starts from.
pub fn resolve_anchor(anchor: &Anchor, ctx: &mut SceneContext) -> HelixResult<CouplingPoint> {
    match anchor {
        Anchor::Fixed(position) => Ok(CouplingPoint::fixed(*position)),
        Anchor::Coupling { first, second, domain } => {
            let n = ctx.config.sample_count;
            let a = generate_on_domain(first, domain, n)?;
            let b = generate_on_domain(second, domain, n)?;
            find_coupling(&a, &b)
        }
        Anchor::Scene(scene_name) => {
            let referenced = evaluate_by_name(scene_name, ctx)?;
            referenced
                .first_coupling()
                .copied()
                .ok_or_else(|| HelixError::MissingCoupling(scene_name.clone()))
        }
    }
}

fn numbered_curves(prefix: &str, params: &[CurveParams], sample_count: usize) -> HelixResult<Vec<LabeledCurve>> {
    params
        .iter()
        .enumerate()
        .map(|(i, p)| Ok(LabeledCurve::new(format!("{}{}", prefix, i + 1), generate(p, sample_count)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::DVec3;
    use crate::core::seeded_or_not::SeededOrNot;
    use crate::dynamics::lagrangian::HelicalMotion;
    use crate::generation::helpers::ParamRanges;

    fn coupling_scene() -> Scene {
        Scene::Coupling {
            first: CurveParams::from_degrees(30.0, 3.0, 0.0, 0.2),
            second: CurveParams::from_degrees(60.0, 2.0, std::f64::consts::FRAC_PI_2, 0.2),
            domain: Domain::turns(2.0),
            sample_count: None,
        }
    }

    #[test]
    fn coupling_scene_uses_shared_domain() {
        let mut ctx = SceneContext::default();
        let output = evaluate("coupling", &coupling_scene(), &mut ctx).unwrap();
        assert_eq!(output.curves.len(), 2);
        assert_eq!(output.curve("first").unwrap().len(), 1000);
        let coupling = output.first_coupling().unwrap();
        let a = output.curve("first").unwrap().point(coupling.source_index).unwrap();
        let b = output.curve("second").unwrap().point(coupling.source_index).unwrap();
        assert_eq!(coupling.position, (a + b) / 2.0);
    }

    #[test]
    fn dispersion_starts_from_fixed_anchor() {
        let anchor = DVec3::new(0.5, -0.5, 2.0);
        let scene = Scene::Dispersion {
            anchor: Anchor::Fixed(anchor),
            branches: vec![CurveParams::from_degrees(40.0, 1.0, 0.0, 0.4)],
            sample_count: Some(50),
        };
        let output = evaluate("dispersion", &scene, &mut SceneContext::default()).unwrap();
        let start = output.curve("branch1").unwrap().point(0).unwrap();
        assert!((start.z - anchor.z).abs() < 1e-12);
        assert_eq!(output.first_coupling().unwrap().position, anchor);
    }

    #[test]
    fn dispersion_branches_sweep_one_turn() {
        let scene = Scene::Dispersion {
            anchor: Anchor::Fixed(DVec3::ZERO),
            branches: vec![CurveParams::new(0.0, 3.0, 0.0, 0.25)],
            sample_count: Some(40),
        };
        let output = evaluate("spun", &scene, &mut SceneContext::default()).unwrap();
        let branch = output.curve("branch1").unwrap();
        assert_eq!(branch.len(), 40);
        assert!((branch.z()[39] - 0.25 * std::f64::consts::TAU).abs() < 1e-12);
    }

    #[test]
    fn hbar_scene_rejects_bad_period_first() {
        let scene = Scene::StructuralHbar {
            motion: HelicalMotion { period: 0.0, ..HelicalMotion::default() },
            turns: 1.0,
            ripple: 0.1,
            ripple_frequency: 3.0,
            partner_phase: 0.2,
            partner_z_offset: 0.0,
            resonance_window: 0.4,
            sample_count: Some(16),
        };
        match evaluate("flat_period", &scene, &mut SceneContext::default()) {
            Err(HelixError::InvalidParameter(message)) => assert!(message.contains("period")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn random_scenes_repeat_with_same_seed() {
        let scene = Scene::ProjectiveSpace {
            ranges: ParamRanges::default(),
            count: 4,
            seed: SeededOrNot::Seeded(42),
            sample_count: Some(20),
        };
        let first = evaluate("space", &scene, &mut SceneContext::default()).unwrap();
        let config = GeneratorConfig { seed: SeededOrNot::Seeded(7), ..GeneratorConfig::default() };
        let second = evaluate("space", &scene, &mut SceneContext::new(config)).unwrap();
        assert_eq!(first.curves, second.curves);
    }

    #[test]
    fn small_sample_counts_are_rejected() {
        let scene = Scene::Projection { params: CurveParams::default(), sample_count: Some(1) };
        let result = evaluate("tiny", &scene, &mut SceneContext::default());
        assert!(matches!(result, Err(HelixError::InvalidParameter(_))));
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let scene = Scene::Dispersion {
            anchor: Anchor::Scene("looping".to_string()),
            branches: vec![],
            sample_count: None,
        };
        let result = evaluate("looping", &scene, &mut SceneContext::default());
        assert_eq!(result, Err(HelixError::CycleDetected("looping".to_string())));
    }
}
