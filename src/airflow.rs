//! 송풍 방향을 나타내는 2차원 점.
//!
//! 좌표계는 y가 위쪽으로 증가한다. 화면에 그릴 때는 렌더링 계층이 y를 뒤집는다.

pub const AIRFLOW_LIMIT: i32 = 150;
pub const AIRFLOW_STEP: i32 = 10;

/// 송풍 방향 버튼.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AirflowPoint {
    pub x: i32,
    pub y: i32,
}

impl AirflowPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// 한 축으로 한 칸 이동한다. 경계를 넘게 되면 움직이지 않고 false 를 반환한다.
    pub fn step(&mut self, direction: Direction) -> bool {
        let (axis, delta) = match direction {
            Direction::Up => (&mut self.y, AIRFLOW_STEP),
            Direction::Down => (&mut self.y, -AIRFLOW_STEP),
            Direction::Left => (&mut self.x, -AIRFLOW_STEP),
            Direction::Right => (&mut self.x, AIRFLOW_STEP),
        };
        let next = *axis + delta;
        if next.abs() > AIRFLOW_LIMIT {
            return false;
        }
        *axis = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_to_the_edge_and_stops() {
        let mut p = AirflowPoint::default();
        let mut moves = 0;
        while p.step(Direction::Left) {
            moves += 1;
        }
        assert_eq!(moves, 15);
        assert_eq!(p, AirflowPoint::new(-150, 0));
    }

    #[test]
    fn moves_only_one_axis() {
        let mut p = AirflowPoint::new(30, -40);
        assert!(p.step(Direction::Up));
        assert_eq!(p, AirflowPoint::new(30, -30));
        assert!(p.step(Direction::Right));
        assert_eq!(p, AirflowPoint::new(40, -30));
    }
}
