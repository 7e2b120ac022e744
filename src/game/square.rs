pub type Coordinate = u8;

pub const TILE_COUNT: usize = 64;

// Tile 0 is a8 (black's back rank, top-left), increasing left-to-right and
// then top-to-bottom, so a1 = 56 and h1 = 63.
pub fn is_valid_coordinate(candidate: i16) -> bool {
    (0..TILE_COUNT as i16).contains(&candidate)
}

const fn file_mask(file: u64) -> u64 {
    let mut mask = 0;
    let mut row = 0;

    while row < 8 {
        mask |= 1 << (file + row * 8);
        row += 1;
    }

    mask
}

const fn row_mask(row: u64) -> u64 {
    0xFF << (row * 8)
}

pub const FILE_A: u64 = file_mask(0);
pub const FILE_B: u64 = file_mask(1);
pub const FILE_G: u64 = file_mask(6);
pub const FILE_H: u64 = file_mask(7);

pub const RANK_8: u64 = row_mask(0);
pub const RANK_7: u64 = row_mask(1);
pub const RANK_2: u64 = row_mask(6);
pub const RANK_1: u64 = row_mask(7);

pub trait CoordinateExt {
    fn file(&self) -> u8;
    fn row(&self) -> u8;
    fn is_on(&self, mask: u64) -> bool;
    fn unparse(&self) -> String;

    const A8: Coordinate = 0;
    const A7: Coordinate = 8;
    const A6: Coordinate = 16;
    const A5: Coordinate = 24;
    const A4: Coordinate = 32;
    const A3: Coordinate = 40;
    const A2: Coordinate = 48;
    const A1: Coordinate = 56;

    const B8: Coordinate = 1;
    const B7: Coordinate = 9;
    const B6: Coordinate = 17;
    const B5: Coordinate = 25;
    const B4: Coordinate = 33;
    const B3: Coordinate = 41;
    const B2: Coordinate = 49;
    const B1: Coordinate = 57;

    const C8: Coordinate = 2;
    const C7: Coordinate = 10;
    const C6: Coordinate = 18;
    const C5: Coordinate = 26;
    const C4: Coordinate = 34;
    const C3: Coordinate = 42;
    const C2: Coordinate = 50;
    const C1: Coordinate = 58;

    const D8: Coordinate = 3;
    const D7: Coordinate = 11;
    const D6: Coordinate = 19;
    const D5: Coordinate = 27;
    const D4: Coordinate = 35;
    const D3: Coordinate = 43;
    const D2: Coordinate = 51;
    const D1: Coordinate = 59;

    const E8: Coordinate = 4;
    const E7: Coordinate = 12;
    const E6: Coordinate = 20;
    const E5: Coordinate = 28;
    const E4: Coordinate = 36;
    const E3: Coordinate = 44;
    const E2: Coordinate = 52;
    const E1: Coordinate = 60;

    const F8: Coordinate = 5;
    const F7: Coordinate = 13;
    const F6: Coordinate = 21;
    const F5: Coordinate = 29;
    const F4: Coordinate = 37;
    const F3: Coordinate = 45;
    const F2: Coordinate = 53;
    const F1: Coordinate = 61;

    const G8: Coordinate = 6;
    const G7: Coordinate = 14;
    const G6: Coordinate = 22;
    const G5: Coordinate = 30;
    const G4: Coordinate = 38;
    const G3: Coordinate = 46;
    const G2: Coordinate = 54;
    const G1: Coordinate = 62;

    const H8: Coordinate = 7;
    const H7: Coordinate = 15;
    const H6: Coordinate = 23;
    const H5: Coordinate = 31;
    const H4: Coordinate = 39;
    const H3: Coordinate = 47;
    const H2: Coordinate = 55;
    const H1: Coordinate = 63;
}

impl CoordinateExt for u8 {
    fn file(&self) -> u8 {
        self % 8
    }

    fn row(&self) -> u8 {
        self / 8
    }

    fn is_on(&self, mask: u64) -> bool {
        mask & (1 << self) != 0
    }

    fn unparse(&self) -> String {
        format!(
            "{}{}",
            (self.file() + b'a') as char,
            (b'8' - self.row()) as char
        )
    }
}
