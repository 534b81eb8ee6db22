use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct Request {
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub body: String,
}

/// Serves one letter per path, /3 returns "3".
fn fetch(req: &Request) -> Response {
    thread::sleep(Duration::from_millis(1));
    Response {
        body: req.path.trim_start_matches('/').to_owned(),
    }
}

/// Sequential.
pub fn alg1(work: &[Request]) -> Vec<Response> {
    work.iter().map(fetch).collect()
}

/// One thread per request, results pushed as they arrive.
pub fn alg2(work: &[Request]) -> Vec<Response> {
    let result = Arc::new(Mutex::new(Vec::new()));
    let handles: Vec<_> = work
        .iter()
        .cloned()
        .map(|req| {
            let result = Arc::clone(&result);
            thread::spawn(move || {
                let resp = fetch(&req);
                result.lock().unwrap().push(resp);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    Arc::try_unwrap(result).unwrap().into_inner().unwrap()
}

/// Each thread writes to its own index.
pub fn alg3(work: &[Request]) -> Vec<Response> {
    let result = Arc::new(Mutex::new(vec![None; work.len()]));
    let handles: Vec<_> = work
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, req)| {
            let result = Arc::clone(&result);
            thread::spawn(move || {
                let resp = fetch(&req);
                result.lock().unwrap()[i] = Some(resp);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let result = Arc::try_unwrap(result).unwrap().into_inner().unwrap();
    result.into_iter().flatten().collect()
}

/// Scoped threads borrow the work and return their response.
pub fn alg4(work: &[Request]) -> Vec<Response> {
    thread::scope(|s| {
        let handles: Vec<_> = work.iter().map(|req| s.spawn(move || fetch(req))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

/// Channels, responses in arrival order.
pub fn alg5(work: &[Request]) -> Vec<Response> {
    let (tx, rx) = mpsc::channel();
    thread::scope(|s| {
        for req in work {
            let tx = tx.clone();
            s.spawn(move || tx.send(fetch(req)).unwrap());
        }
    });
    drop(tx);
    rx.iter().collect()
}

/// Channels carrying the index, responses sorted back into order.
pub fn alg6(work: &[Request]) -> Vec<Response> {
    let (tx, rx) = mpsc::channel();
    thread::scope(|s| {
        for (i, req) in work.iter().enumerate() {
            let tx = tx.clone();
            s.spawn(move || tx.send((i, fetch(req))).unwrap());
        }
    });
    drop(tx);
    let mut result: Vec<_> = rx.iter().collect();
    result.sort_by_key(|(i, _)| *i);
    result.into_iter().map(|(_, resp)| resp).collect()
}

/// Work stealing thread pool.
pub fn alg7(work: &[Request]) -> Vec<Response> {
    work.par_iter().map(fetch).collect()
}
