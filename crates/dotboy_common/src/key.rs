/// Frontend-neutral key codes.
///
/// Runners translate their own input events into these before handing
/// them to an emulator core.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    S,
    X,
    Z,
    Enter,
    Space,
    Backspace,
    Escape,
}
