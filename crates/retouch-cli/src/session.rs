//! The interactive editing loop.
//!
//! A [`Session`] asks for an image from its catalog, then repeatedly shows
//! the menu, turns the chosen entry into an [`Operation`], applies it to
//! the [`TransformEngine`] and hands the result to the presenter.
//!
//! Nothing the user does ends the session early: bad input is re-asked,
//! failed loads and rejected operations are reported and the menu comes
//! back. End of input behaves like choosing Exit.

use crate::menu::{self, MenuChoice};
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use retouch_core::config::{
    BRIGHTNESS_DELTA_MAX, BRIGHTNESS_DELTA_MIN, CONTRAST_LEVEL_MAX, CONTRAST_LEVEL_MIN,
};
use retouch_core::PixelBuffer;
use retouch_io::{ImageCatalog, Presenter};
use retouch_ops::grayscale::grayscale;
use retouch_ops::{dispatch, EngineOptions, FlipAxis, Operation, TransformEngine};
use std::io::{BufRead, Write};
#[allow(unused_imports)]
use tracing::{debug, info, trace, warn};

/// What the loop does after a menu entry has gathered its parameters.
enum Step {
    Apply(Operation),
    ChangeImage(String),
    Skip,
    Quit,
}

/// One interactive editing session.
pub struct Session<C, P> {
    catalog: C,
    presenter: P,
    options: EngineOptions,
    engine: Option<TransformEngine>,
}

impl<C: ImageCatalog, P: Presenter> Session<C, P> {
    /// Creates a session; no image is loaded until [`run`](Self::run).
    pub fn new(catalog: C, presenter: P, options: EngineOptions) -> Self {
        Self {
            catalog,
            presenter,
            options,
            engine: None,
        }
    }

    /// Engine of the current image, once one has been loaded.
    pub fn engine(&self) -> Option<&TransformEngine> {
        self.engine.as_ref()
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Runs the session until Exit or end of input.
    ///
    /// # Errors
    ///
    /// Fails only if the catalog cannot be listed or the prompt cannot be
    /// read or written.
    pub fn run<R: BufRead, W: Write>(&mut self, prompt: &mut Prompter<R, W>) -> Result<()> {
        info!("session started");
        if !self.load_initial(prompt)? {
            info!("no image selected");
            return Ok(());
        }

        loop {
            prompt.say(menu::render().trim_end())?;
            let Some(code) = prompt.ask_int("Your choice", 0..=MenuChoice::max_code())? else {
                break;
            };
            let Some(choice) = MenuChoice::from_code(code) else {
                continue;
            };
            debug!(%choice, "menu");

            match self.request(choice, prompt)? {
                Step::Apply(op) => self.apply(op, prompt)?,
                Step::ChangeImage(id) => self.change_image(&id, prompt)?,
                Step::Skip => {}
                Step::Quit => break,
            }
        }

        info!("session finished");
        Ok(())
    }

    /// Picks and loads the first image. Returns `false` at end of input.
    fn load_initial<R: BufRead, W: Write>(&mut self, prompt: &mut Prompter<R, W>) -> Result<bool> {
        loop {
            let Some(id) = self.pick(prompt, "Select the image to edit")? else {
                return Ok(false);
            };
            match self.catalog.load(&id) {
                Ok(buffer) => {
                    self.engine = Some(TransformEngine::with_options(buffer, self.options));
                    prompt.say(format!("Editing {id}"))?;
                    self.show();
                    return Ok(true);
                }
                Err(e) => {
                    warn!(id, error = %e, "initial load failed");
                    prompt.say(format!("Cannot open {id}: {e}"))?;
                }
            }
        }
    }

    /// Lists the catalog and asks for an index. `None` at end of input or
    /// when the catalog is empty.
    fn pick<R: BufRead, W: Write>(
        &mut self,
        prompt: &mut Prompter<R, W>,
        question: &str,
    ) -> Result<Option<String>> {
        let mut names = self
            .catalog
            .list_available()
            .context("Failed to list images")?;
        if names.is_empty() {
            prompt.say("No images available")?;
            return Ok(None);
        }

        prompt.say("Index\t|\tImage")?;
        for (i, name) in names.iter().enumerate() {
            prompt.say(format!("{i}\t|\t{name}"))?;
        }
        let last = names.len() as i64 - 1;
        Ok(prompt
            .ask_int(question, 0..=last)?
            .map(|i| names.swap_remove(i as usize)))
    }

    /// Gathers the parameters of `choice`.
    fn request<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        prompt: &mut Prompter<R, W>,
    ) -> Result<Step> {
        let step = match choice {
            MenuChoice::Brightness => prompt
                .ask_int(
                    "Brightness delta",
                    BRIGHTNESS_DELTA_MIN as i64..=BRIGHTNESS_DELTA_MAX as i64,
                )?
                .map_or(Step::Quit, |delta| {
                    Step::Apply(Operation::Brightness { delta: delta as i32 })
                }),
            MenuChoice::Contrast => prompt
                .ask_int(
                    "Contrast level",
                    CONTRAST_LEVEL_MIN as i64..=CONTRAST_LEVEL_MAX as i64,
                )?
                .map_or(Step::Quit, |level| {
                    Step::Apply(Operation::Contrast { level: level as f64 })
                }),
            MenuChoice::Grayscale => Step::Apply(Operation::Grayscale),
            MenuChoice::Flip => prompt
                .ask_int("Direction (0 = up/down, 1 = left/right)", 0..=1)?
                .map_or(Step::Quit, |d| {
                    Step::Apply(Operation::Flip(FlipAxis::from_left_right(d == 1)))
                }),
            MenuChoice::Stacking => match self.pick(prompt, "Select the image to stack")? {
                Some(id) => match self.stack_layer(&id) {
                    Some(layer) => Step::Apply(Operation::Stack(layer)),
                    None => {
                        prompt.say(format!("Cannot open {id}"))?;
                        Step::Skip
                    }
                },
                None => Step::Quit,
            },
            MenuChoice::Blurring => Step::Apply(Operation::Blur),
            MenuChoice::Reset => Step::Apply(Operation::Reset),
            MenuChoice::ChangeImage => self
                .pick(prompt, "Select the new image")?
                .map_or(Step::Quit, Step::ChangeImage),
            MenuChoice::Exit => Step::Quit,
        };
        Ok(step)
    }

    /// Loads `id` as the second stacking layer, grayscaled.
    fn stack_layer(&self, id: &str) -> Option<PixelBuffer> {
        match self.catalog.load(id) {
            Ok(mut layer) => {
                grayscale(&mut layer);
                Some(layer)
            }
            Err(e) => {
                warn!(id, error = %e, "stack layer not loaded");
                None
            }
        }
    }

    fn apply<R: BufRead, W: Write>(&mut self, op: Operation, prompt: &mut Prompter<R, W>) -> Result<()> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        let name = op.name();
        match dispatch(engine, op) {
            Ok(()) => {
                trace!(op = name, "applied");
                self.show();
            }
            Err(e) => {
                warn!(op = name, error = %e, "operation rejected");
                prompt.say(format!("Cannot apply {name}: {e}"))?;
            }
        }
        Ok(())
    }

    fn change_image<R: BufRead, W: Write>(&mut self, id: &str, prompt: &mut Prompter<R, W>) -> Result<()> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        let catalog = &self.catalog;
        match engine.load_with(|| catalog.load(id)) {
            Ok(()) => {
                prompt.say(format!("Editing {id}"))?;
                self.show();
            }
            Err(e) => {
                warn!(id, error = %e, "change image failed");
                prompt.say(format!("Cannot open {id}: {e}"))?;
            }
        }
        Ok(())
    }

    fn show(&mut self) {
        if let Some(engine) = &self.engine {
            self.presenter.display(engine.target());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Shape;
    use retouch_io::MemoryCatalog;
    use std::io::Cursor;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<PixelBuffer>,
    }

    impl Presenter for Recorder {
        fn display(&mut self, buffer: &PixelBuffer) {
            self.frames.push(buffer.clone());
        }
    }

    fn catalog() -> MemoryCatalog {
        let shape = Shape::new(3, 3, 3);
        let data = (0..shape.len()).map(|i| (i * 29 % 256) as u8).collect();
        MemoryCatalog::new()
            .with("a.png", PixelBuffer::filled(shape, 100))
            .with("b.png", PixelBuffer::filled(Shape::new(2, 2, 3), 7))
            .with("c.png", PixelBuffer::from_vec(shape, data).unwrap())
    }

    fn run(script: &str) -> (Session<MemoryCatalog, Recorder>, String) {
        let mut session = Session::new(catalog(), Recorder::default(), EngineOptions::sequential());
        let mut prompt = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        session.run(&mut prompt).unwrap();
        let (_, out) = prompt.into_parts();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_brightness_flip_reset() {
        let (session, out) = run("0\n0\n20\n3\n1\n6\n8\n");
        let frames = &session.presenter().frames;
        assert_eq!(frames.len(), 4);
        assert!(frames[1].as_slice().iter().all(|&v| v == 120));
        assert_eq!(frames[3], PixelBuffer::filled(Shape::new(3, 3, 3), 100));
        assert!(out.contains("Editing a.png"));
        assert!(out.contains("8\t:\tExit"));
    }

    #[test]
    fn test_eof_before_selection() {
        let (session, out) = run("");
        assert!(session.engine().is_none());
        assert!(session.presenter().frames.is_empty());
        assert!(out.contains("2\t|\tc.png"));
    }

    #[test]
    fn test_eof_in_parameter_prompt_exits() {
        let (session, _) = run("0\n0\n");
        assert_eq!(session.presenter().frames.len(), 1);
        let engine = session.engine().unwrap();
        assert_eq!(engine.target(), engine.origin());
    }

    #[test]
    fn test_stack_mismatch_reported() {
        let (session, out) = run("0\n4\n1\n8\n");
        assert!(out.contains("Cannot apply stack"));
        assert_eq!(session.presenter().frames.len(), 1);
        let engine = session.engine().unwrap();
        assert_eq!(engine.target(), engine.origin());
    }

    #[test]
    fn test_stack_grayscales_both_layers() {
        let (session, _) = run("0\n4\n2\n8\n");
        let cat = catalog();
        let mut expected = cat.load("a.png").unwrap();
        let mut layer = cat.load("c.png").unwrap();
        grayscale(&mut layer);
        retouch_ops::composite::stack(&mut expected, &layer).unwrap();

        assert_eq!(session.engine().unwrap().target(), &expected);
        assert_eq!(session.presenter().frames.len(), 2);
    }

    #[test]
    fn test_change_image_replaces_origin() {
        let (session, _) = run("0\n2\n7\n2\n8\n");
        let engine = session.engine().unwrap();
        assert_eq!(engine.origin(), &catalog().load("c.png").unwrap());
        assert_eq!(engine.target(), engine.origin());
        assert_eq!(session.presenter().frames.len(), 3);
    }

    #[test]
    fn test_invalid_menu_input_reasked() {
        let (session, out) = run("0\nblur\n9\n5\n8\n");
        assert!(out.contains("'blur' is not a whole number"));
        assert!(out.contains("9 is out of range"));
        assert_eq!(session.presenter().frames.len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let mut session = Session::new(MemoryCatalog::new(), Recorder::default(), EngineOptions::default());
        let mut prompt = Prompter::new(Cursor::new(b"0\n".to_vec()), Vec::new());
        session.run(&mut prompt).unwrap();
        assert!(session.engine().is_none());
        let (_, out) = prompt.into_parts();
        assert!(String::from_utf8(out).unwrap().contains("No images available"));
    }
}
