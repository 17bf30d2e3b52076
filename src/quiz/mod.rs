pub mod composer;

pub use composer::{
    compose_blank,
    compose_quiz,
    compose_multiple_choice,
    QuizComposer,
};
