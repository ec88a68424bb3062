//! Flag table used to build the installer command line.
//!
//! Each command exposes its flags as an ordered list so the
//! synthesized arguments are deterministic.

/// Value of a parsed flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Switch(bool),
    Text(String),
    /// Duration in minutes, rendered as the number of minutes.
    Minutes(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlagKind {
    /// Consumed by the command itself, never forwarded.
    Internal,
    /// Declared by the command and forwarded when not at its default.
    Declared,
    /// Global flag forwarded whenever it is present.
    Inherited,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub name: &'static str,
    pub kind: FlagKind,
    pub default: Option<FlagValue>,
    pub value: Option<FlagValue>,
}

impl Flag {
    pub fn internal(name: &'static str, value: FlagValue) -> Self {
        Self {
            name,
            kind: FlagKind::Internal,
            default: None,
            value: Some(value),
        }
    }

    pub fn declared(
        name: &'static str,
        default: Option<FlagValue>,
        value: Option<FlagValue>,
    ) -> Self {
        Self {
            name,
            kind: FlagKind::Declared,
            default,
            value,
        }
    }

    pub fn inherited(name: &'static str, value: Option<FlagValue>) -> Self {
        Self {
            name,
            kind: FlagKind::Inherited,
            default: None,
            value,
        }
    }

    /// Whether this flag is passed on to the installer.
    fn forwarded(&self) -> bool {
        match self.kind {
            FlagKind::Internal => false,
            FlagKind::Declared => self.value.is_some() && self.value != self.default,
            FlagKind::Inherited => self.value.is_some(),
        }
    }
}

/// Append the forwarded flags to an argument list.
pub fn append(args: &mut Vec<String>, flags: &[Flag]) {
    for flag in flags.iter().filter(|f| f.forwarded()) {
        if let Some(ref value) = flag.value {
            render(args, flag.name, value);
        }
    }
}

fn render(args: &mut Vec<String>, name: &str, value: &FlagValue) {
    match value {
        FlagValue::Switch(on) => {
            if *on {
                args.push(format!("--{}", name));
            }
        }
        FlagValue::Text(text) => {
            args.push(format!("--{}", name));
            args.push(text.clone());
        }
        FlagValue::Minutes(quantity) => {
            args.push(format!("--{}", name));
            args.push(quantity.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesize(flags: &[Flag]) -> Vec<String> {
        let mut args = Vec::new();
        append(&mut args, flags);
        args
    }

    #[test]
    fn internal_never_forwarded() {
        let flags = vec![
            Flag::internal("name", FlagValue::Text("Quiz".to_string())),
            Flag::internal("includebeta", FlagValue::Switch(true)),
        ];
        assert!(synthesize(&flags).is_empty());
    }

    #[test]
    fn false_switch_omitted() {
        let flags = vec![
            Flag::declared("noprompt", None, Some(FlagValue::Switch(false))),
            Flag::inherited("json", Some(FlagValue::Switch(false))),
        ];
        assert!(synthesize(&flags).is_empty());
    }

    #[test]
    fn true_switch_is_bare() {
        let flags = vec![
            Flag::declared(
                "noprompt",
                Some(FlagValue::Switch(false)),
                Some(FlagValue::Switch(true)),
            ),
            Flag::inherited("json", Some(FlagValue::Switch(true))),
        ];
        assert_eq!(vec!["--noprompt", "--json"], synthesize(&flags));
    }

    #[test]
    fn default_value_omitted() {
        let default = Some(FlagValue::Text("Mixed".to_string()));
        let flags = vec![
            Flag::declared("upgradetype", default.clone(), default.clone()),
            Flag::declared(
                "securitytype",
                Some(FlagValue::Text("AdminsOnly".to_string())),
                Some(FlagValue::Text("AllUsers".to_string())),
            ),
        ];
        assert_eq!(vec!["--securitytype", "AllUsers"], synthesize(&flags));
    }

    #[test]
    fn unset_declared_omitted() {
        let flags = vec![Flag::declared("wait", None, None)];
        assert!(synthesize(&flags).is_empty());
    }

    #[test]
    fn minutes_render_quantity() {
        let flags = vec![Flag::declared("wait", None, Some(FlagValue::Minutes(10)))];
        assert_eq!(vec!["--wait", "10"], synthesize(&flags));
    }

    #[test]
    fn inherited_always_forwarded() {
        let warn = Some(FlagValue::Text("warn".to_string()));
        let flags = vec![
            Flag::inherited("targetusername", Some(FlagValue::Text("ebikes".to_string()))),
            Flag::inherited("apiversion", None),
            Flag::inherited("loglevel", warn),
        ];
        assert_eq!(
            vec!["--targetusername", "ebikes", "--loglevel", "warn"],
            synthesize(&flags)
        );
    }

    #[test]
    fn order_follows_table() {
        let flags = vec![
            Flag::declared("wait", None, Some(FlagValue::Minutes(2))),
            Flag::declared("installationkey", None, Some(FlagValue::Text("k".to_string()))),
            Flag::inherited("targetusername", Some(FlagValue::Text("org".to_string()))),
        ];
        assert_eq!(
            vec!["--wait", "2", "--installationkey", "k", "--targetusername", "org"],
            synthesize(&flags)
        );
    }
}
