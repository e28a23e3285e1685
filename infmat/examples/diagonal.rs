//! Fill both diagonals of a 10x10 matrix through the write proxy and print
//! a fragment, the occupied cell count and every occupied cell.

use infmat::{Matrix, Window};

const ROWS_MAX: i64 = 10;
const COLS_MAX: i64 = ROWS_MAX;

fn main() {
    let mut m = Matrix::<i64>::new();

    // Main and anti diagonals. (0, 0) and (9, 0) get the default and are
    // dropped again at the next compaction.
    for row in 0..ROWS_MAX {
        let anti = COLS_MAX - 1 - row;
        m.row_mut(row)[anti] = anti;
        m.row_mut(row)[row] = row;
    }

    // Fragment [1,1]..[8,8]; reading never materializes
    print!("{}", Window::new(&m, 1..9, 1..9));

    println!("{}", m.size());

    for (pos, value) in &m {
        println!("[{}][{}] = {value}", pos.row, pos.col);
    }
}
