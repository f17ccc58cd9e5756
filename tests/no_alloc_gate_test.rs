use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use stacker::engine::Game;
use stacker::input::HeldActions;
use stacker::types::{GameAction, GameConfig};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

fn tap(game: &mut Game, held: &mut HeldActions, action: GameAction) {
    held.step();
    held.press(action);
    let _ = game.update(1.0, &*held);
    held.step();
    held.release(action);
    if game.update(1.0, &*held).game_over {
        game.restart();
    }
}

#[test]
fn update_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut game = Game::new(GameConfig::default(), 1).unwrap();
    let mut held = HeldActions::new();

    // Warm-up: the first lock grows the preview buffer to its steady size.
    tap(&mut game, &mut held, GameAction::HardDrop);
    tap(&mut game, &mut held, GameAction::Hold);

    let allocs = with_alloc_counting(|| {
        // Idle updates run gravity and lock timers.
        for _ in 0..200 {
            held.step();
            let _ = game.update(1.0, &held);
        }

        for _ in 0..50 {
            tap(&mut game, &mut held, GameAction::MoveLeft);
            tap(&mut game, &mut held, GameAction::MoveRight);
            tap(&mut game, &mut held, GameAction::RotateCw);
            tap(&mut game, &mut held, GameAction::RotateCcw);
        }

        // Hard drop drives lock, line clear, hold restore and spawning.
        for _ in 0..100 {
            tap(&mut game, &mut held, GameAction::HardDrop);
            tap(&mut game, &mut held, GameAction::Hold);
        }
    });

    assert_eq!(allocs, 0);
}
