use crate::transform::ALL_OPERATIONS;
use crate::utils::OutputStyle;

pub fn handle_list_command() {
    OutputStyle::print_header("🔤 Available operations");
    for op in ALL_OPERATIONS {
        println!("  {}", OutputStyle::label(op.name()));
    }
}
