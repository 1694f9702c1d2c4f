//! Integration tests for importing FX layers into a menu.

use fxmenu::animator::{
    AnimationClip, AnimatorCondition, AnimatorController, AnimatorLayer, AnimatorState, BlendTree,
    ChildMotion, CurveBinding, Keyframe, Motion, StateTransition,
};
use fxmenu::asset::{guid_for_path, AssetStore, DirAssetStore, MemoryAssetStore};
use fxmenu::menu::{
    Animation, BranchAnimationType, ComparisonOperator, Condition, Hand, HandGesture,
    JsonMenuRepository, MemoryMenuRepository, Menu, MenuRepository,
};
use fxmenu::{ImportOutcome, Importer};

fn clip_transition(parameter: &str, gesture: f32, clip: &str) -> StateTransition {
    StateTransition::new(
        vec![AnimatorCondition::equals(parameter, gesture)],
        AnimatorState::new(clip, Some(Motion::clip(clip))),
    )
}

fn smile_clip() -> AnimationClip {
    AnimationClip::new("smile").with_curve(
        CurveBinding::new("Body", "blendShape.smile", "SkinnedMeshRenderer"),
        vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 100.0)],
    )
}

#[test]
fn test_single_transition_end_to_end() {
    let controller = AnimatorController::new("FX", vec![AnimatorLayer::with_transitions(
        "Face",
        vec![clip_transition("GestureLeft", 3.0, "Assets/C.anim")],
    )]);
    let mut store = MemoryAssetStore::new();
    let mut repo = MemoryMenuRepository::new(Menu::new());

    let outcome = Importer::new(&mut store).run(&controller, &mut repo).unwrap();

    let ImportOutcome::Imported { mode_id, branch_count } = outcome else {
        panic!("expected branches to be imported");
    };
    assert_eq!(branch_count, 1);

    assert_eq!(repo.saves().len(), 1, "menu should be saved exactly once");
    assert!(!repo.saves()[0].1, "menu should be saved in place");

    let mode = repo.menu().mode(&mode_id).expect("mode should exist");
    assert_eq!(mode.display_name, "FX");
    assert_eq!(mode.parent(), Menu::REGISTERED_ID);
    assert_eq!(mode.branches.len(), 1);

    let branch = &mode.branches[0];
    assert_eq!(
        branch.conditions(),
        [Condition::new(Hand::Left, HandGesture(3), ComparisonOperator::Equals)]
    );
    assert_eq!(
        branch.animation(BranchAnimationType::Base),
        Some(&Animation::new(guid_for_path("Assets/C.anim")))
    );
    assert!(store.created().is_empty());
}

#[test]
fn test_existing_modes_are_kept() {
    let mut menu = Menu::new();
    let existing = menu.add_mode(Menu::REGISTERED_ID).unwrap();
    let mut repo = MemoryMenuRepository::new(menu);
    let controller = AnimatorController::new("FX", vec![AnimatorLayer::with_transitions(
        "Face",
        vec![clip_transition("GestureRight", 2.0, "Assets/open.anim")],
    )]);

    let mut store = MemoryAssetStore::new();
    Importer::new(&mut store).run(&controller, &mut repo).unwrap();

    let modes = repo.menu().modes();
    assert_eq!(modes.len(), 2);
    assert_eq!(modes[0].id(), existing);
    assert_eq!(modes[1].display_name, "FX");
}

#[test]
fn test_mixed_layers_ordering() {
    // Declared order: left layer first, right layer second. The right layer
    // is visited first, so the lead branch is right-handed.
    let controller = AnimatorController::new("FX", vec![
        AnimatorLayer::with_transitions("Left Hand", vec![
            clip_transition("GestureLeft", 4.0, "Assets/l4.anim"),
            clip_transition("GestureLeft", 1.0, "Assets/l1.anim"),
        ]),
        AnimatorLayer::with_transitions("Right Hand", vec![
            clip_transition("GestureRight", 7.0, "Assets/r7.anim"),
            clip_transition("GestureRight", 2.0, "Assets/r2.anim"),
            clip_transition("Viseme", 2.0, "Assets/dropped.anim"),
        ]),
    ]);
    let mut store = MemoryAssetStore::new();
    let branches = Importer::new(&mut store).collect_branches(&controller).unwrap();

    let order: Vec<(Hand, i32)> = branches
        .iter()
        .map(|b| {
            let c = b.first_condition().unwrap();
            (c.hand(), c.hand_gesture().value())
        })
        .collect();
    assert_eq!(
        order,
        vec![(Hand::Right, 2), (Hand::Right, 7), (Hand::Left, 1), (Hand::Left, 4)]
    );
}

#[test]
fn test_shared_timed_clip_split_once() {
    let timed = AnimatorState::new("smile", Some(Motion::clip("Assets/Face/smile.anim"))).with_time_parameter();
    let controller = AnimatorController::new("FX", vec![AnimatorLayer::with_transitions("Face", vec![
        StateTransition::new(vec![AnimatorCondition::equals("GestureLeft", 2.0)], timed.clone()),
        StateTransition::new(vec![AnimatorCondition::equals("GestureRight", 2.0)], timed),
    ])]);
    let mut store = MemoryAssetStore::new();
    store.insert("Assets/Face/smile.anim", smile_clip());

    let branches = Importer::new(&mut store).collect_branches(&controller).unwrap();

    assert_eq!(store.created().len(), 2, "one split pair per source clip");
    let (first, second) = (&store.created()[0], &store.created()[1]);
    assert!(first.starts_with("Assets/Face/smile_first_"));
    assert!(second.starts_with("Assets/Face/smile_second_"));

    let left = &branches[0];
    assert_eq!(left.first_condition().unwrap().hand(), Hand::Left);
    assert!(left.is_left_trigger_used());
    assert_eq!(
        left.animation(BranchAnimationType::Left).map(Animation::guid),
        Some(guid_for_path(second).as_str())
    );

    let right = &branches[1];
    assert!(right.is_right_trigger_used());
    assert_eq!(
        right.animation(BranchAnimationType::Base),
        left.animation(BranchAnimationType::Base)
    );
    assert_eq!(
        right.animation(BranchAnimationType::Right),
        left.animation(BranchAnimationType::Left)
    );

    let first_clip = store.load_clip(first).unwrap();
    assert_eq!(first_clip.curves[0].curve.keys, vec![Keyframe::new(0.0, 0.0)]);
    let second_clip = store.load_clip(second).unwrap();
    assert_eq!(second_clip.curves[0].curve.keys, vec![Keyframe::new(1.0, 100.0)]);
}

#[test]
fn test_blend_tree_and_dropped_transitions() {
    let tree = BlendTree::new("fist", vec![
        ChildMotion::new(Some(Motion::clip("Assets/fist_open.anim")), 0.0),
        ChildMotion::new(Some(Motion::clip("Assets/fist_closed.anim")), 1.0),
    ]);
    let lonely = BlendTree::new("lonely", vec![ChildMotion::new(Some(Motion::clip("Assets/x.anim")), 0.0)]);
    let controller = AnimatorController::new("FX", vec![AnimatorLayer::with_transitions("Face", vec![
        StateTransition::new(
            vec![AnimatorCondition::equals("GestureLeft", 1.0)],
            AnimatorState::new("fist", Some(Motion::BlendTree(tree))),
        ),
        StateTransition::new(
            vec![AnimatorCondition::equals("GestureLeft", 2.0)],
            AnimatorState::new("lonely", Some(Motion::BlendTree(lonely))),
        ),
        clip_transition("GestureLeft", 0.0, "Assets/neutral.anim"),
    ])]);

    let mut store = MemoryAssetStore::new();
    let branches = Importer::new(&mut store).collect_branches(&controller).unwrap();

    assert_eq!(branches.len(), 1);
    assert_eq!(
        branches[0].animation(BranchAnimationType::Right).map(Animation::guid),
        Some(guid_for_path("Assets/fist_closed.anim").as_str())
    );
}

#[test]
fn test_json_files_roundtrip() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let project = temp.path().join("project");

    let mut assets = DirAssetStore::new(&project);
    assets
        .create_clip("Assets/Face/smile.anim", &smile_clip())
        .expect("Failed to write source clip");

    let controller_path = temp.path().join("fx.json");
    std::fs::write(
        &controller_path,
        r#"{
            "name": "FX",
            "layers": [{
                "name": "Face",
                "state_machine": {
                    "any_state_transitions": [
                        {
                            "conditions": [{"parameter": "GestureRight", "mode": "Equals", "threshold": 4}],
                            "destination": {
                                "name": "smile",
                                "motion": {"type": "clip", "clip": "Assets/Face/smile.anim"},
                                "time_parameter_active": true
                            }
                        }
                    ]
                }
            }]
        }"#,
    )
    .expect("Failed to write controller");

    let controller = AnimatorController::open(&controller_path).expect("Failed to read controller");
    let menu_path = temp.path().join("menu.json");
    let mut repo = JsonMenuRepository::new(&menu_path);

    let outcome = Importer::new(&mut assets).run(&controller, &mut repo).expect("Import failed");
    assert!(matches!(outcome, ImportOutcome::Imported { branch_count: 1, .. }));

    let menu = repo.load().expect("Failed to reload menu");
    let mode = menu.registered().next().expect("Mode missing");
    assert_eq!(mode.display_name, "FX");
    let branch = &mode.branches[0];
    assert!(branch.is_right_trigger_used());
    assert!(branch.animation(BranchAnimationType::Right).is_some());

    let derived: Vec<_> = std::fs::read_dir(project.join("Assets/Face"))
        .expect("Asset dir missing")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(derived.len(), 3, "source plus two halves: {:?}", derived);
    assert!(derived.iter().any(|n| n.starts_with("smile_first_")));
    assert!(derived.iter().any(|n| n.starts_with("smile_second_")));
}

#[test]
fn test_empty_controller() {
    let mut store = MemoryAssetStore::new();
    let mut repo = MemoryMenuRepository::new(Menu::new());
    let outcome = Importer::new(&mut store)
        .run(&AnimatorController::default(), &mut repo)
        .unwrap();
    assert_eq!(outcome, ImportOutcome::NoBranches);
    assert!(repo.saves().is_empty());
}
