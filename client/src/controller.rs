use std::cell::{Ref, RefCell};
use std::fmt::Display;
use std::num::NonZeroU32;
use std::rc::Rc;

use message::GenerateQuiz;
use session::{QuizSession, Resolution};

use crate::{QuizService, Token};

/// Drives a shared [`QuizSession`] through fetches against a [`QuizService`].
///
/// The session lives behind `Rc<RefCell<_>>` so the host can render it while
/// a fetch is in flight. No borrow is held across the network call, and the
/// optional change hook runs after every mutation.
pub struct QuizController<S> {
    service: Rc<S>,
    token: Token,
    session: Rc<RefCell<QuizSession>>,
    on_change: Option<Rc<dyn Fn()>>,
}

impl<S> Clone for QuizController<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            token: self.token.clone(),
            session: self.session.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<S: QuizService> QuizController<S> {
    pub fn new(service: Rc<S>, token: Token, session: Rc<RefCell<QuizSession>>) -> Self {
        Self {
            service,
            token,
            session,
            on_change: None,
        }
    }

    pub fn on_change(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_change = Some(Rc::new(hook));
        self
    }

    pub fn session(&self) -> Ref<'_, QuizSession> {
        self.session.borrow()
    }

    /// Requests a new quiz. If another call is issued before this one
    /// resolves, this call's result is dropped and `Resolution::Stale` is
    /// returned.
    pub async fn generate_quiz(&self, topic: &str, count: NonZeroU32) -> Resolution {
        let generation = self.session.borrow_mut().begin_generate();
        self.notify();

        let request = GenerateQuiz {
            prompt: topic,
            num_questions: count.get(),
        };
        let result = self.service.generate(&request, &self.token).await;

        let resolution = self
            .session
            .borrow_mut()
            .finish_generate(generation, result);
        self.notify();

        resolution
    }

    pub fn record_answer(&self, index: usize, option: &str) -> session::Result<()> {
        self.session.borrow_mut().record_answer(index, option)?;
        self.notify();
        Ok(())
    }

    pub fn submit_answers(&self) -> session::Result<()> {
        self.session.borrow_mut().submit()?;
        self.notify();
        Ok(())
    }

    pub fn reject_input(&self, err: impl Display) {
        self.session.borrow_mut().reject_input(err);
        self.notify();
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.session.borrow().is_correct(index)
    }

    fn notify(&self) {
        if let Some(hook) = &self.on_change {
            hook();
        }
    }
}
