/*
 * Unit tests for the car module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * The car I/O is a ReplayCar; actuator calls are read back from its command
 * channel.
 *
 * Tests:
 *  - test_queue_insert_sorts_by_direction
 *  - test_queue_purge_resets_idle
 *  - test_go_to_commits_direction
 *  - test_go_to_same_floor
 *  - test_go_to_invalid_floor
 *  - test_go_to_backtrack
 *  - test_go_to_going_past
 *  - test_go_to_force_stop
 *  - test_withdraw
 *  - test_queue_stays_sorted
 *  - test_availability
 *  - test_availability_full
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod car_tests {
    use crate::car::{availability, Car, CarState, MoveStatus};
    use crate::host::{Command, ReplayCar};
    use crate::shared::Availability;
    use crate::shared::Direction::{Down, Up};
    use crossbeam_channel::unbounded;
    use crossbeam_channel::Receiver;

    const TOP_FLOOR: u8 = 5;
    const FULL: f64 = 0.7;

    fn setup_car(floor: u8) -> (Car<ReplayCar>, Receiver<Command>) {
        let (command_tx, command_rx) = unbounded::<Command>();
        (Car::new(0, ReplayCar::new(0, floor, command_tx)), command_rx)
    }

    #[test]
    fn test_queue_insert_sorts_by_direction() {
        // Arrange
        let mut state = CarState::new();
        state.direction = Some(Down);

        // Act
        let inserted = [4, 1, 3, 4].map(|floor| state.insert(floor));

        // Assert
        assert_eq!(inserted, [true, true, true, false]);
        assert_eq!(state.queue, vec![4, 3, 1]);

        state.direction = Some(Up);
        state.sort();
        assert_eq!(state.queue, vec![1, 3, 4]);
    }

    #[test]
    fn test_queue_purge_resets_idle() {
        // Arrange
        let mut state = CarState::new();
        state.direction = Some(Up);
        state.furthest_target = Some(4);
        state.queue = vec![2, 4, 2];

        // Act & Assert
        assert_eq!(state.purge(2), 2);
        assert_eq!(state.queue, vec![4]);
        assert_eq!(state.direction, Some(Up));

        assert_eq!(state.purge(4), 1);
        assert!(state.is_idle());
        assert_eq!(state.direction, None);
        assert_eq!(state.furthest_target, None);

        assert_eq!(state.purge(3), 0);
    }

    #[test]
    fn test_go_to_commits_direction() {
        // Arrange
        let (mut car, command_rx) = setup_car(0);

        // Act
        let result = car.go_to(5, Up, false, TOP_FLOOR);

        // Assert
        assert!(result.success);
        assert_eq!(result.status, MoveStatus::Moved);
        assert_eq!(car.state.direction, Some(Up));
        assert_eq!(car.state.furthest_target, Some(5));
        assert_eq!(car.state.queue, vec![5]);
        assert_eq!(
            command_rx.try_iter().collect::<Vec<_>>(),
            vec![
                Command::UpIndicator { car: 0, lit: true },
                Command::MoveTo { car: 0, floor: 5, force_stop: false },
            ]
        );
        assert_eq!(car.io.indicators(), (true, false));
    }

    #[test]
    fn test_go_to_same_floor() {
        // Arrange
        let (mut car, _command_rx) = setup_car(2);
        assert!(car.go_to(2, Up, false, TOP_FLOOR).success);

        // Act
        let result = car.go_to(2, Up, false, TOP_FLOOR);

        // Assert
        assert!(!result.success);
        assert_eq!(result.status, MoveStatus::SameFloor);
        assert_eq!(car.state.queue, vec![2]);
    }

    #[test]
    fn test_go_to_invalid_floor() {
        let (mut car, command_rx) = setup_car(0);

        let result = car.go_to(9, Up, false, TOP_FLOOR);

        assert!(!result.success);
        assert_eq!(result.status, MoveStatus::InvalidFloor(9));
        assert_eq!(result.status.to_string(), "invalid floor: 9");
        assert!(car.state.is_idle());
        assert_eq!(car.state.direction, None);
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn test_go_to_backtrack() {
        // Arrange
        let (mut car, command_rx) = setup_car(1);
        car.go_to(3, Up, false, TOP_FLOOR);
        car.go_to(5, Up, false, TOP_FLOOR);
        assert_eq!(car.state.queue, vec![3, 5]);
        let _ = command_rx.try_iter().count();

        // Act
        let result = car.go_to(2, Up, false, TOP_FLOOR);

        // Assert
        assert!(!result.success);
        assert_eq!(result.status, MoveStatus::Backtrack);
        assert_eq!(car.state.queue, vec![3, 5]);
        assert_eq!(car.state.furthest_target, Some(5));
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn test_go_to_going_past() {
        // Arrange
        let (mut car, _command_rx) = setup_car(1);
        car.go_to(5, Up, false, TOP_FLOOR);

        // Act
        let result = car.go_to(3, Down, false, TOP_FLOOR);

        // Assert
        assert!(!result.success);
        assert_eq!(result.status, MoveStatus::GoingPast);
        assert_eq!(car.state.direction, Some(Up));
        assert_eq!(car.state.queue, vec![5]);
    }

    #[test]
    fn test_go_to_force_stop() {
        // Arrange
        let (mut car, command_rx) = setup_car(2);
        car.go_to(5, Up, false, TOP_FLOOR);
        let _ = command_rx.try_iter().count();

        // Act
        let result = car.go_to(3, Up, true, TOP_FLOOR);

        // Assert
        assert!(result.success);
        assert_eq!(car.state.queue, vec![3, 5]);
        assert_eq!(car.state.furthest_target, Some(5));
        assert_eq!(
            command_rx.try_iter().collect::<Vec<_>>(),
            vec![Command::MoveTo { car: 0, floor: 3, force_stop: true }]
        );
    }

    #[test]
    fn test_withdraw() {
        // Arrange
        let (mut car, command_rx) = setup_car(0);
        car.go_to(3, Up, false, TOP_FLOOR);
        car.go_to(5, Up, false, TOP_FLOOR);
        let _ = command_rx.try_iter().count();

        // Act & Assert
        assert!(car.withdraw(5));
        assert_eq!(car.state.queue, vec![3]);
        assert_eq!(car.state.furthest_target, Some(3));
        assert_eq!(car.state.direction, Some(Up));
        assert_eq!(
            command_rx.try_iter().collect::<Vec<_>>(),
            vec![Command::MoveTo { car: 0, floor: 3, force_stop: false }]
        );

        assert!(!car.withdraw(4));

        assert!(car.withdraw(3));
        assert!(car.state.is_idle());
        assert_eq!(car.state.direction, None);
        assert_eq!(car.io.indicators(), (false, false));
        assert_eq!(
            command_rx.try_iter().collect::<Vec<_>>(),
            vec![
                Command::UpIndicator { car: 0, lit: false },
                Command::Stop { car: 0 },
            ]
        );
    }

    #[test]
    fn test_queue_stays_sorted() {
        // Arrange
        let (mut car, _command_rx) = setup_car(5);

        // Act & Assert
        for floor in [3, 1, 2, 0] {
            car.go_to(floor, Down, false, TOP_FLOOR);
            assert!(car.state.is_sorted(), "queue {:?}", car.state.queue);
        }
        assert_eq!(car.state.queue, vec![3, 2, 1, 0]);

        car.state.purge(2);
        assert!(car.state.is_sorted());
        assert_eq!(car.state.direction, Some(Down));
    }

    #[test]
    fn test_availability() {
        // Arrange
        let (mut car, _command_rx) = setup_car(0);

        // Act & Assert
        assert_eq!(availability(&car, 3, Up, FULL), Availability::Idle);

        car.go_to(5, Up, false, TOP_FLOOR);
        assert_eq!(availability(&car, 5, Down, FULL), Availability::EnRoute);
        assert_eq!(availability(&car, 3, Up, FULL), Availability::Busy);
        assert_eq!(availability(&car, 2, Down, FULL), Availability::Unavailable);

        // Pressed buttons keep a car out of the idle pool
        let (mut pressed, _rx) = setup_car(0);
        pressed.io.press(4);
        assert_eq!(availability(&pressed, 2, Down, FULL), Availability::Busy);

        assert!(Availability::EnRoute > Availability::Idle);
        assert_eq!(Availability::Unavailable.score(), -1);
    }

    #[test]
    fn test_availability_full() {
        let (mut car, _command_rx) = setup_car(0);
        car.go_to(5, Up, false, TOP_FLOOR);

        car.io.set_load(FULL);

        assert_eq!(availability(&car, 3, Up, FULL), Availability::Unavailable);
        assert_eq!(availability(&car, 5, Up, FULL), Availability::EnRoute);
    }
}
