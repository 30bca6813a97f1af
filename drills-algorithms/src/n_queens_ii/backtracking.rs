use anyhow::Result;
use drills_challenges::n_queens_ii::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        count: total_n_queens(challenge.n),
    }))
}

struct Board {
    n: usize,
    columns: Vec<bool>,
    diagonals: Vec<bool>,
    anti_diagonals: Vec<bool>,
}

/// Number of ways to place `n` non-attacking queens. The empty board counts once.
pub fn total_n_queens(n: usize) -> usize {
    let mut board = Board {
        n,
        columns: vec![false; n],
        diagonals: vec![false; 2 * n],
        anti_diagonals: vec![false; 2 * n],
    };
    place(&mut board, 0)
}

fn place(board: &mut Board, row: usize) -> usize {
    if row == board.n {
        return 1;
    }
    let mut count = 0;
    for col in 0..board.n {
        let d = row + board.n - col;
        let a = row + col;
        if board.columns[col] || board.diagonals[d] || board.anti_diagonals[a] {
            continue;
        }
        board.columns[col] = true;
        board.diagonals[d] = true;
        board.anti_diagonals[a] = true;
        count += place(board, row + 1);
        board.columns[col] = false;
        board.diagonals[d] = false;
        board.anti_diagonals[a] = false;
    }
    count
}
