/**
 * Sensors and actuators of one physical car, supplied by the simulation host.
 *
 * The scheduler only reads the sensors and only writes the actuators. Where the
 * car physically is, how its doors behave and how its load is measured are the
 * host's business.
 *
 * # Sensors
 * - `current_floor`:       Last floor the car was at.
 * - `load_factor`:         0.0 is empty, 1.0 is full. Approximate.
 * - `pressed_floors`:      Floors whose in-car button is lit.
 *
 * # Actuators
 * - `commit_move_to`:      Next stop. `force_stop` asks for an unplanned stop on the way.
 * - `set_up_indicator`:    Up arrow, shown to waiting passengers.
 * - `set_down_indicator`:  Down arrow, shown to waiting passengers.
 * - `stop`:                Nothing left to do; park where you are.
 */
pub trait CarIo {
    fn current_floor(&self) -> u8;
    fn load_factor(&self) -> f64;
    fn pressed_floors(&self) -> Vec<u8>;

    fn commit_move_to(&mut self, floor: u8, force_stop: bool);
    fn set_up_indicator(&mut self, lit: bool);
    fn set_down_indicator(&mut self, lit: bool);
    fn stop(&mut self);
}
