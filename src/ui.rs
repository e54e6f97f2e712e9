//! Restart affordance shown on the game-over screen

/// A clickable restart control. Hidden while playing, shown after a game over.
#[derive(Debug, Clone, Default)]
pub struct RestartControl {
    visible: bool,
}

impl RestartControl {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Click the control. Only a visible control requests a restart.
    pub fn activate(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_control_does_nothing() {
        let mut control = RestartControl::default();
        assert!(!control.activate());
        control.show();
        assert!(control.activate());
        control.hide();
        assert!(!control.is_visible());
    }
}
