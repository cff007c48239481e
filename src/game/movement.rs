use super::constants::CELL_SIZE;
use super::grid;
use super::types::{Direction, Player, Position};

pub fn advance_head(player: &Player) -> Option<Position> {
  let head = player.body.first()?;
  let (dx, dy) = match player.heading {
    Direction::Up => (0, -CELL_SIZE),
    Direction::Down => (0, CELL_SIZE),
    Direction::Left => (-CELL_SIZE, 0),
    Direction::Right => (CELL_SIZE, 0),
  };
  Some(Position {
    x: grid::wrap(head.x + dx),
    y: grid::wrap(head.y + dy),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_player(head: Position, heading: Direction) -> Player {
    Player {
      body: vec![head],
      heading,
      score: 0,
    }
  }

  #[test]
  fn advances_one_cell_in_each_heading() {
    let origin = Position { x: 300, y: 300 };
    let cases = [
      (Direction::Up, Position { x: 300, y: 280 }),
      (Direction::Down, Position { x: 300, y: 320 }),
      (Direction::Left, Position { x: 280, y: 300 }),
      (Direction::Right, Position { x: 320, y: 300 }),
    ];
    for (heading, expected) in cases {
      let player = make_player(origin, heading);
      assert_eq!(advance_head(&player), Some(expected));
    }
  }

  #[test]
  fn wraps_across_every_edge() {
    let east = make_player(Position { x: 580, y: 100 }, Direction::Right);
    assert_eq!(advance_head(&east), Some(Position { x: 0, y: 100 }));

    let west = make_player(Position { x: 0, y: 100 }, Direction::Left);
    assert_eq!(advance_head(&west), Some(Position { x: 580, y: 100 }));

    let south = make_player(Position { x: 100, y: 580 }, Direction::Down);
    assert_eq!(advance_head(&south), Some(Position { x: 100, y: 0 }));

    let north = make_player(Position { x: 100, y: 0 }, Direction::Up);
    assert_eq!(advance_head(&north), Some(Position { x: 100, y: 580 }));
  }

  #[test]
  fn empty_body_has_no_move() {
    let player = Player {
      body: Vec::new(),
      heading: Direction::Right,
      score: 0,
    };
    assert_eq!(advance_head(&player), None);
  }
}
