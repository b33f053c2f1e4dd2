//! Page templates, compiled into the binary.

use minijinja::{Environment, Value};

pub const INDEX: &str = "index.html";
pub const TOPICS: &str = "topics.html";
pub const UPCOMING_EVENTS: &str = "upcoming-events.html";

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template(INDEX, include_str!("../templates/index.html"))?;
        env.add_template(TOPICS, include_str!("../templates/topics.html"))?;
        env.add_template(
            UPCOMING_EVENTS,
            include_str!("../templates/upcoming-events.html"),
        )?;

        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
