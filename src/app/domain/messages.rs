/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Input
    BillAmountChanged(String),
    TipPercentChanged(u32),

    // View
    DarkModeToggled(bool),
}
