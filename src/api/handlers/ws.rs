// src/api/handlers/ws.rs
use actix::{Actor, StreamHandler, Handler, Message, Addr, AsyncContext};
use actix_web::{web, HttpRequest, HttpResponse, Error};
use actix_web_actors::ws;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::view::ViewEvent;

impl Message for ViewEvent {
    type Result = ();
}

/// Fans view events out to every open page.
///
/// The broker remembers the last event so a page that connects late still
/// learns the current state: registering and broadcasting share one lock, and
/// a new client gets that state as its first frame.
#[derive(Clone, Default)]
pub struct WsBroker {
    inner: Arc<RwLock<BrokerState>>,
}

#[derive(Default)]
struct BrokerState {
    clients: Vec<Addr<WsConnection>>,
    current: ViewEvent,
}

impl WsBroker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, addr: Addr<WsConnection>) {
        let mut inner = self.inner.write().await;
        addr.do_send(inner.current);
        inner.clients.push(addr);
    }

    pub async fn unregister(&self, addr: &Addr<WsConnection>) {
        let mut inner = self.inner.write().await;
        inner.clients.retain(|c| c != addr);
    }

    pub async fn broadcast(&self, msg: ViewEvent) {
        let mut inner = self.inner.write().await;
        inner.current = msg;
        for client in inner.clients.iter() {
            client.do_send(msg);
        }
    }

    /// Relays controller events until the controller goes away.
    pub async fn forward(self, mut events: broadcast::Receiver<ViewEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.broadcast(event).await,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("WebSocket relay skipped {} view events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

pub struct WsConnection {
    broker: WsBroker,
}

impl WsConnection {
    pub fn new(broker: WsBroker) -> Self {
        Self { broker }
    }
}

impl Actor for WsConnection {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let addr = ctx.address();
        let broker = self.broker.clone();
        actix::spawn(async move {
            broker.register(addr).await;
        });
    }

    fn stopped(&mut self, ctx: &mut Self::Context) {
        let addr = ctx.address();
        let broker = self.broker.clone();
        actix::spawn(async move {
            broker.unregister(&addr).await;
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsConnection {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => ctx.close(reason),
            _ => (),
        }
    }
}

impl Handler<ViewEvent> for WsConnection {
    type Result = ();

    fn handle(&mut self, msg: ViewEvent, ctx: &mut Self::Context) {
        if let Ok(json) = serde_json::to_string(&msg) {
            ctx.text(json);
        }
    }
}

pub async fn ws_handler(
    req: HttpRequest,
    stream: web::Payload,
    broker: web::Data<WsBroker>,
) -> Result<HttpResponse, Error> {
    let conn = WsConnection::new(broker.get_ref().clone());
    ws::start(conn, &req, stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_forward_stops_when_sender_is_dropped() {
        let (tx, rx) = broadcast::channel(4);
        let broker = WsBroker::new();
        let relay = actix_rt::spawn(broker.clone().forward(rx));

        tx.send(ViewEvent::Busy).unwrap();
        tx.send(ViewEvent::Idle).unwrap();
        drop(tx);

        relay.await.unwrap();
        let inner = broker.inner.read().await;
        assert!(inner.clients.is_empty());
        assert_eq!(inner.current, ViewEvent::Idle);
    }

    #[test]
    fn test_event_json_shape() {
        assert_eq!(serde_json::to_string(&ViewEvent::Busy).unwrap(), r#"{"state":"busy"}"#);
        assert_eq!(serde_json::to_string(&ViewEvent::Idle).unwrap(), r#"{"state":"idle"}"#);
    }
}
