use floater_engine::FloaterWorld;
use floater_engine::config::SimConfig;
use floater_engine::sim::World;

#[test]
fn stock_startup_has_three_moving_entities() {
    let w = FloaterWorld::with_seed(1280, 720, 2024);
    assert_eq!(w.count(), 3);
    assert_eq!(w.speed(), 50);
    assert_eq!(w.entities(), 3);

    let f = w.world().floaters();
    for i in 0..3 {
        let e = f.get(i).unwrap();
        assert_eq!(e.respawn_timer, 0);
        assert!(e.vx != 0.0 || e.vy != 0.0);
    }
}

#[test]
fn output_lists_every_active_entity() {
    let mut w = FloaterWorld::with_seed(800, 600, 11);
    w.set_count(8);
    w.tick();
    assert_eq!(w.output_len(), 16);

    let f = w.world().floaters();
    for (i, pair) in w.output().chunks_exact(2).enumerate() {
        assert_eq!(pair, &[f.x[i], f.y[i]]);
    }
}

#[test]
fn clicked_entity_disappears_for_two_seconds() {
    let mut w = FloaterWorld::with_seed(800, 600, 77);
    w.set_count(1);
    let e = w.world().floaters().get(0).unwrap();

    assert_eq!(w.click(e.x + 3.0, e.y - 4.0), 1);
    assert_eq!(w.respawn_timer(0), 120);

    for _ in 0..119 {
        w.tick();
        assert_eq!(w.output_len(), 0);
        let now = w.world().floaters().get(0).unwrap();
        assert_eq!((now.x, now.y), (e.x, e.y));
    }

    // 120th frame relocates, still hidden
    w.tick();
    assert_eq!(w.output_len(), 0);
    assert_eq!(w.respawn_timer(0), 0);
    let moved = w.world().floaters().get(0).unwrap();
    assert!((0.0..800.0).contains(&moved.x));
    assert!((0.0..600.0).contains(&moved.y));

    w.tick();
    assert_eq!(w.output_len(), 2);
}

#[test]
fn far_click_changes_nothing() {
    let mut w = FloaterWorld::with_seed(800, 600, 5);
    w.set_count(1);
    let e = w.world().floaters().get(0).unwrap();
    assert_eq!(w.click(e.x + 60.0, e.y), 0);
    assert_eq!(w.click(e.x + 40.0, e.y + 40.0), 0);
    assert_eq!(w.respawn_timer(0), 0);
}

#[test]
fn entities_never_escape_the_margin() {
    let mut w = FloaterWorld::with_seed(320, 240, 31337);
    w.set_speed(100);
    w.set_count(20);
    for _ in 0..5_000 {
        w.tick();
        for pair in w.output().chunks_exact(2) {
            assert!((-50.0..=370.0).contains(&pair[0]), "x {}", pair[0]);
            assert!((-50.0..=290.0).contains(&pair[1]), "y {}", pair[1]);
        }
    }
}

#[test]
fn same_seed_same_motion() {
    let mut a = World::with_seed(640, 480, SimConfig::default(), 9);
    let mut b = World::with_seed(640, 480, SimConfig::default(), 9);
    a.init();
    b.init();
    for _ in 0..50 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.encoder().floats(), b.encoder().floats());
}
