use tokio::sync::watch;

pub trait LoadQueryUseCase: Send + Sync {
    fn execute(&self) -> watch::Receiver<String>;
}
