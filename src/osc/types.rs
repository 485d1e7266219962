/// Address the consumer reads chatbox text from
pub const CHATBOX_INPUT_ADDR: &str = "/chatbox/input";

/// Address the consumer reads the typing indicator from
pub const CHATBOX_TYPING_ADDR: &str = "/chatbox/typing";

/// A single typed OSC argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OscArg {
    /// OSC-string, type tag `s`
    Str(String),
    /// Boolean, type tag `T` or `F` with no payload
    Bool(bool),
}

impl OscArg {
    /// Type tag character for this argument
    pub fn tag(&self) -> char {
        match self {
            OscArg::Str(_) => 's',
            OscArg::Bool(true) => 'T',
            OscArg::Bool(false) => 'F',
        }
    }
}

/// An addressed OSC message with its argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OscMessage {
    pub addr: String,
    pub args: Vec<OscArg>,
}

impl OscMessage {
    pub fn new(addr: impl Into<String>, args: Vec<OscArg>) -> Self {
        Self {
            addr: addr.into(),
            args,
        }
    }
}

/// Commands the relay forwards to the chatbox consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatboxCommand {
    /// Set the chatbox text
    Input {
        text: String,
        /// `true` sends immediately; `false` only fills the keyboard
        visible: bool,
        /// Play the notification sound
        sound: bool,
    },
    /// Toggle the typing indicator
    Typing(bool),
}

impl ChatboxCommand {
    /// Lower the command to its wire message
    pub fn to_message(&self) -> OscMessage {
        match self {
            ChatboxCommand::Input {
                text,
                visible,
                sound,
            } => OscMessage::new(
                CHATBOX_INPUT_ADDR,
                vec![
                    OscArg::Str(text.clone()),
                    OscArg::Bool(*visible),
                    OscArg::Bool(*sound),
                ],
            ),
            ChatboxCommand::Typing(typing) => {
                OscMessage::new(CHATBOX_TYPING_ADDR, vec![OscArg::Bool(*typing)])
            }
        }
    }

    /// Short name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            ChatboxCommand::Input { .. } => "input",
            ChatboxCommand::Typing(_) => "typing",
        }
    }
}
