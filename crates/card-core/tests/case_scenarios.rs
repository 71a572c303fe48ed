// Host-side scenarios for the drag -> tap pipeline.

use card_core::*;
use glam::Vec2;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const CASE: Extent = Extent::new(300.0, 400.0);
const CARD: Extent = Extent::new(100.0, 100.0);

#[derive(Clone, Default)]
struct Recorder {
    gains: Rc<RefCell<Vec<f32>>>,
}

impl TapOutput for Recorder {
    type Buffer = ();

    fn emit(&self, _buffer: &(), gain: f32) -> CaseResult<()> {
        self.gains.borrow_mut().push(gain);
        Ok(())
    }
}

fn make_case(reset: HitReset) -> (CaseController<Recorder>, Rc<RefCell<Vec<f32>>>) {
    let out = Recorder::default();
    let gains = out.gains.clone();
    let mut player = TapPlayer::new(out, VolumeCurve::Linear);
    let ticket = player.prepare().expect("fresh player prepares");
    assert!(player.on_loaded(ticket, Ok(())));
    (CaseController::new(player, reset), gains)
}

fn drag_to(case: &mut CaseController<Recorder>, x: f32, y: f32) -> CaseFrame {
    case.drag(Vec2::new(x, y), CASE, CARD, Volume::default())
        .expect("drag active")
}

#[test]
fn left_overrun_clamps_and_taps_once() {
    let (mut case, gains) = make_case(HitReset::Clear);
    case.press(Vec2::ZERO, Vec2::ZERO);

    let f = drag_to(&mut case, -50.0, 50.0);
    assert_eq!(f.position, Vec2::new(0.0, 50.0));
    assert!(f.hits.horizontal);
    assert!(!f.hits.vertical);
    assert_eq!(f.taps, 1);
    assert_eq!(f.highlight, Highlight::Blue);
    assert_eq!(gains.borrow().len(), 1);
}

#[test]
fn right_overrun_held_against_wall_taps_once() {
    let (mut case, gains) = make_case(HitReset::Clear);
    case.press(Vec2::ZERO, Vec2::ZERO);

    let f = drag_to(&mut case, 250.0, 50.0);
    assert_eq!(f.position.x, 200.0);
    assert!(f.hits.horizontal);
    assert_eq!(f.taps, 1);

    let f = drag_to(&mut case, 260.0, 50.0);
    assert!(f.hits.horizontal);
    assert_eq!(f.taps, 0);
    for i in 0..50 {
        let f = drag_to(&mut case, 260.0 + i as f32, 50.0);
        assert_eq!(f.taps, 0);
    }
    assert_eq!(gains.borrow().len(), 1);
}

#[test]
fn returning_in_bounds_rearms_the_tap() {
    let (mut case, gains) = make_case(HitReset::Clear);
    case.press(Vec2::ZERO, Vec2::ZERO);

    drag_to(&mut case, -10.0, 10.0);
    drag_to(&mut case, -20.0, 10.0);
    assert_eq!(drag_to(&mut case, 50.0, 10.0).taps, 0);
    assert_eq!(drag_to(&mut case, -5.0, 10.0).taps, 1);
    assert_eq!(gains.borrow().len(), 2);
}

#[test]
fn horizontal_overrun_leaves_vertical_alone() {
    let (mut case, _) = make_case(HitReset::Clear);
    case.press(Vec2::ZERO, Vec2::ZERO);

    drag_to(&mut case, -30.0, 100.0);
    assert_eq!(
        case.player().episodes().vertical.state(),
        EpisodeState::Idle
    );
    let f = drag_to(&mut case, -30.0, 350.0);
    assert!(f.hits.vertical && f.hits.horizontal);
    assert_eq!(f.position, Vec2::new(0.0, 300.0));
    assert_eq!(f.taps, 1, "only the vertical edge is new");
    assert_eq!(f.highlight, Highlight::Red);
}

#[test]
fn clamped_position_stays_inside_for_any_path() {
    let (mut case, _) = make_case(HitReset::Clear);
    case.press(Vec2::new(40.0, 60.0), Vec2::ZERO);
    let max = CASE.max_origin(CARD);
    // seeded walk well beyond the case on every side
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        let x: f32 = rng.gen_range(-300.0..600.0);
        let y: f32 = rng.gen_range(-350.0..750.0);
        let f = drag_to(&mut case, x, y);
        assert!(f.position.x >= 0.0 && f.position.x <= max.x, "{:?}", f);
        assert!(f.position.y >= 0.0 && f.position.y <= max.y, "{:?}", f);
    }
}

#[test]
fn grab_offset_is_respected() {
    let (mut case, _) = make_case(HitReset::Clear);
    // card sits at (50, 50); grabbed 20px into it
    case.press(Vec2::new(70.0, 70.0), Vec2::new(50.0, 50.0));
    let f = drag_to(&mut case, 100.0, 120.0);
    assert_eq!(f.position, Vec2::new(80.0, 100.0));
    assert!(!f.hits.any());
}

#[test]
fn release_resets_hits_by_default() {
    let (mut case, _) = make_case(HitReset::Clear);
    case.press(Vec2::ZERO, Vec2::ZERO);
    drag_to(&mut case, -10.0, 0.0);
    let f = case.release(Volume::default()).expect("was dragging");
    assert_eq!(f.highlight, Highlight::Gray);
    assert_eq!(f.position, Vec2::ZERO);
    assert!(case.release(Volume::default()).is_none());
    assert!(case
        .drag(Vec2::new(10.0, 10.0), CASE, CARD, Volume::default())
        .is_none());

    // next contact is a fresh episode
    case.press(Vec2::ZERO, Vec2::ZERO);
    assert_eq!(drag_to(&mut case, -10.0, 0.0).taps, 1);
}

#[test]
fn release_can_keep_hits() {
    let (mut case, _) = make_case(HitReset::Keep);
    case.press(Vec2::ZERO, Vec2::ZERO);
    drag_to(&mut case, -10.0, 0.0);
    let f = case.release(Volume::default()).expect("was dragging");
    assert_eq!(f.highlight, Highlight::Blue);
    assert_eq!(case.highlight(), Highlight::Blue);

    // still in the same contact episode: pressing again against the wall is silent
    case.press(Vec2::ZERO, Vec2::ZERO);
    assert_eq!(drag_to(&mut case, -10.0, 0.0).taps, 0);
}

#[test]
fn louder_volume_means_higher_gain_and_zero_is_silent() {
    let (mut case, gains) = make_case(HitReset::Clear);
    case.press(Vec2::ZERO, Vec2::ZERO);
    case.drag(Vec2::new(-1.0, 10.0), CASE, CARD, Volume::new(0.2));
    case.drag(Vec2::new(10.0, 10.0), CASE, CARD, Volume::new(0.2));
    case.drag(Vec2::new(-1.0, 10.0), CASE, CARD, Volume::new(0.8));
    case.drag(Vec2::new(10.0, 10.0), CASE, CARD, Volume::new(0.8));
    let f = case
        .drag(Vec2::new(-1.0, 10.0), CASE, CARD, Volume::MUTE)
        .expect("drag active");
    assert_eq!(f.taps, 0);
    let g = gains.borrow();
    assert_eq!(g.len(), 2);
    assert!(g[1] > g[0]);
}

#[test]
fn failed_asset_keeps_clamping_identical() {
    let (mut ok_case, _) = make_case(HitReset::Clear);

    let out = Recorder::default();
    let gains = out.gains.clone();
    let mut player = TapPlayer::new(out, VolumeCurve::Linear);
    let ticket = player.prepare().expect("fresh player prepares");
    player.on_loaded(ticket, Err(CaseError::asset("/sounds/hit.mp3", "network")));
    let mut broken = CaseController::new(player, HitReset::Clear);

    ok_case.press(Vec2::ZERO, Vec2::ZERO);
    broken.press(Vec2::ZERO, Vec2::ZERO);
    for (x, y) in [(-50.0, 50.0), (250.0, 50.0), (260.0, 450.0), (10.0, 10.0)] {
        let a = drag_to(&mut ok_case, x, y);
        let b = drag_to(&mut broken, x, y);
        assert_eq!(a.position, b.position);
        assert_eq!(a.hits, b.hits);
        assert_eq!(b.taps, 0);
    }
    assert!(broken.player().is_unsupported());
    assert!(gains.borrow().is_empty());
}

#[test]
fn unsupported_audio_never_taps() {
    let player = TapPlayer::unsupported(
        Recorder::default(),
        VolumeCurve::Linear,
        CaseError::AudioUnsupported("no AudioContext".into()),
    );
    let mut case = CaseController::new(player, HitReset::Clear);
    case.press(Vec2::ZERO, Vec2::ZERO);
    assert_eq!(drag_to(&mut case, -1.0, -1.0).taps, 0);
    assert!(case.player_mut().prepare().is_none());
}

fn page_transition(case: &mut CaseController<Recorder>, transition: PageTransition) {
    if transition.action() == LifecycleAction::Teardown {
        case.player_mut().close();
    }
}

#[test]
fn back_forward_cache_keeps_taps_working() {
    let (mut case, gains) = make_case(HitReset::Clear);
    page_transition(&mut case, PageTransition::Hidden { persisted: true });
    page_transition(&mut case, PageTransition::Shown { persisted: true });

    case.press(Vec2::ZERO, Vec2::ZERO);
    assert_eq!(drag_to(&mut case, -50.0, 50.0).taps, 1);
    assert!(case.player().accepts_output());
    assert_eq!(gains.borrow().len(), 1);
}

#[test]
fn real_unload_silences_and_refuses_new_contexts() {
    let (mut case, gains) = make_case(HitReset::Clear);
    page_transition(&mut case, PageTransition::Hidden { persisted: false });

    case.press(Vec2::ZERO, Vec2::ZERO);
    let f = drag_to(&mut case, -50.0, 50.0);
    assert_eq!(f.position, Vec2::new(0.0, 50.0));
    assert_eq!(f.taps, 0);
    assert!(!case.player().accepts_output());
    assert!(gains.borrow().is_empty());
}
