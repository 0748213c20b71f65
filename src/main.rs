// SPDX-License-Identifier: MPL-2.0
use iced_contact::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        endpoint: args.opt_value_from_str("--endpoint").unwrap(),
        offline: args.contains("--offline"),
    };

    app::run(flags)
}
