use std::io::{BufRead, Write};

use crate::{
    app::App,
    blink::StatusSink,
    error::{LadError, Result},
    hardware::PinInterface,
    log_info,
};

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    /// Run the menu until Exit or until the console input closes
    pub fn run(&mut self) -> Result<()> {
        self.setup()?;

        let result = self.menu_loop();

        // Always leave the pins released, even after a hardware error
        let cleanup = self.shutdown();
        result.and(cleanup)
    }

    fn menu_loop(&mut self) -> Result<()> {
        while self.running {
            let selection = match self.console.select_menu() {
                Ok(selection) => selection,
                Err(LadError::InputClosed) => {
                    log_info!("Console input closed, exiting");
                    break;
                }
                Err(e) => return Err(e),
            };

            match self.handle_selection(selection) {
                Err(LadError::InputClosed) => {
                    log_info!("Console input closed mid-prompt, exiting");
                    break;
                }
                other => other?,
            }
        }
        Ok(())
    }
}
