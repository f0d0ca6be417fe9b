//! Pattern 9: Facade
//! Example: An operating system hiding its servers behind five calls
//!
//! Run with: cargo run --bin p09_facade

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    New,
    Running,
    Restarted,
    Killed,
}

// ============================================================================
// Subsystems the client never has to touch
// ============================================================================

pub struct FileServer {
    pub state: State,
}

impl FileServer {
    pub fn new() -> Self {
        FileServer { state: State::New }
    }

    pub fn boot(&mut self) {
        self.state = State::Running;
        println!("FileServer booted up!");
    }

    pub fn kill(&mut self, restart: bool) {
        println!("FileServer killed!");
        if restart {
            self.state = State::Restarted;
            println!("FileServer restarted!");
        } else {
            self.state = State::Killed;
        }
    }

    pub fn create_file(&self, user: &str, name: &str, permission: &str) -> String {
        format!(
            "Created file for user {} ({} with permissions: {})",
            user, name, permission
        )
    }
}

pub struct ProcessServer {
    pub state: State,
}

impl ProcessServer {
    pub fn new() -> Self {
        ProcessServer { state: State::New }
    }

    pub fn boot(&mut self) {
        self.state = State::Running;
        println!("ProcessServer booted up!");
    }

    pub fn kill(&mut self, restart: bool) {
        println!("ProcessServer killed!");
        if restart {
            self.state = State::Restarted;
            println!("ProcessServer restarted!");
        } else {
            self.state = State::Killed;
        }
    }

    pub fn create_process(&self, user: &str, name: &str) -> String {
        format!("Created process for user {} ({})", user, name)
    }
}

// ============================================================================
// The facade
// ============================================================================

pub struct OperatingSystem {
    fs: FileServer,
    ps: ProcessServer,
}

impl OperatingSystem {
    pub fn new() -> Self {
        println!("OS Booted up!");
        OperatingSystem {
            fs: FileServer::new(),
            ps: ProcessServer::new(),
        }
    }

    pub fn start(&mut self) {
        self.fs.boot();
        self.ps.boot();
    }

    pub fn shutdown(&mut self) {
        self.fs.kill(false);
        self.ps.kill(false);
    }

    pub fn restart(&mut self) {
        self.fs.kill(true);
        self.ps.kill(true);
    }

    pub fn create_file(&self, user: &str, name: &str, permission: &str) -> String {
        self.fs.create_file(user, name, permission)
    }

    pub fn create_process(&self, user: &str, name: &str) -> String {
        self.ps.create_process(user, name)
    }

    pub fn states(&self) -> (State, State) {
        (self.fs.state, self.ps.state)
    }
}

fn main() {
    let mut os = OperatingSystem::new();
    os.start();
    println!("{}", os.create_file("Amitabh", "hello-world.txt", "r r-w"));
    println!("{}", os.create_process("Amitabh", "calm"));
    os.restart();
    os.shutdown();
}
