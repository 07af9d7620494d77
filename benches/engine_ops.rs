use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_match3::core::cascade::drop_blocks;
use tui_match3::core::{BoardEngine, Grid, MatchFinder, MoveValidator};
use tui_match3::types::{Pos, Tile};

fn bench_has_valid_moves(c: &mut Criterion) {
    let validator = MoveValidator::default();
    // Worst case: no swap matches, so every pair is tried.
    let mut stuck: Grid = "DCDCDCD RKRKRKR CDCDCDC KRKRKRK DCDCDCD RKRKRKR CDCDCDC"
        .parse()
        .unwrap();

    c.bench_function("has_valid_moves_stuck", |b| {
        b.iter(|| validator.has_valid_moves(black_box(&mut stuck)).unwrap())
    });
}

fn bench_find_all(c: &mut Criterion) {
    let finder = MatchFinder::default();
    let grid: Grid = "DDDCRPK DKPRKPR DRKPRKP KPRKPRK RKPRKPR PRKPRKP KPRKPRK"
        .parse()
        .unwrap();

    c.bench_function("find_all_matches", |b| {
        b.iter(|| finder.find_all(black_box(&grid)))
    });
}

fn bench_drop_blocks(c: &mut Criterion) {
    let settled = BoardEngine::new(12345).unwrap().grid().clone();

    c.bench_function("drop_blocks_half_empty", |b| {
        b.iter(|| {
            let mut grid = settled.clone();
            for pos in Grid::positions().filter(|p| (p.row + p.col) % 2 == 0) {
                grid.set(pos, Tile::Empty).unwrap();
            }
            drop_blocks(&mut grid).unwrap();
            grid
        })
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let engine = BoardEngine::new(12345).unwrap();
    let hint = engine.hint().unwrap();

    c.bench_function("attempt_move_hinted", |b| {
        b.iter(|| {
            let mut e = engine.clone();
            match hint {
                Some(s) => e.apply_swap(s).unwrap(),
                None => e.attempt_move(Pos::new(0, 0), Pos::new(0, 1)).unwrap(),
            }
        })
    });
}

criterion_group!(
    benches,
    bench_has_valid_moves,
    bench_find_all,
    bench_drop_blocks,
    bench_attempt_move
);
criterion_main!(benches);
