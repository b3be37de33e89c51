//! Main language server implementation

use std::collections::HashMap;
use std::sync::Arc;

use crate::features::document_symbols::{collect_document_symbols, FoamDocumentSymbol};
use crate::features::folding_ranges::{folding_ranges as collect_folding_ranges, FoamFoldingRange};
use foam_config::FoamConfig;
use foam_parser::foam::ast::{Position as AstPosition, Range as AstRange};
use foam_parser::foam::document::TextDocument;
use foam_parser::foam::parsing::ParseOptions;
use tokio::sync::RwLock;
use tower_lsp::async_trait;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    DocumentSymbol, DocumentSymbolParams, DocumentSymbolResponse, FoldingRange, FoldingRangeParams,
    FoldingRangeProviderCapability, InitializeParams, InitializeResult, InitializedParams, OneOf,
    Position, Range, ServerCapabilities, ServerInfo, TextDocumentItem, TextDocumentSyncCapability,
    TextDocumentSyncKind, Url,
};
use tower_lsp::Client;
use tracing::debug;

pub trait LspClient: Send + Sync + Clone + 'static {}
impl LspClient for Client {}

pub trait FeatureProvider: Send + Sync + 'static {
    fn document_symbols(&self, document: &TextDocument) -> Vec<FoamDocumentSymbol>;
    fn folding_ranges(&self, document: &TextDocument) -> Vec<FoamFoldingRange>;
}

/// Runs the outline engine with a fixed set of options.
#[derive(Debug, Default)]
pub struct DefaultFeatureProvider {
    options: ParseOptions,
}

impl DefaultFeatureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl FeatureProvider for DefaultFeatureProvider {
    fn document_symbols(&self, document: &TextDocument) -> Vec<FoamDocumentSymbol> {
        collect_document_symbols(document, &self.options)
    }

    fn folding_ranges(&self, document: &TextDocument) -> Vec<FoamFoldingRange> {
        collect_folding_ranges(document, &self.options)
    }
}

#[derive(Default)]
struct DocumentStore {
    entries: RwLock<HashMap<Url, Arc<TextDocument>>>,
}

impl DocumentStore {
    async fn upsert(&self, uri: Url, text: String) {
        let document = Arc::new(TextDocument::new(text));
        self.entries.write().await.insert(uri, document);
    }

    async fn get(&self, uri: &Url) -> Option<Arc<TextDocument>> {
        self.entries.read().await.get(uri).cloned()
    }

    async fn remove(&self, uri: &Url) {
        self.entries.write().await.remove(uri);
    }
}

pub struct FoamLanguageServer<C = Client, P = DefaultFeatureProvider> {
    _client: C,
    documents: DocumentStore,
    features: Arc<P>,
    folding_ranges: bool,
}

impl FoamLanguageServer<Client, DefaultFeatureProvider> {
    pub fn new(client: Client) -> Self {
        Self::with_features(client, Arc::new(DefaultFeatureProvider::new()))
    }

    pub fn from_config(client: Client, config: &FoamConfig) -> Self {
        let features = DefaultFeatureProvider::with_options(config.outline.parse_options());
        Self::with_features(client, Arc::new(features))
            .with_folding_ranges(config.lsp.folding_ranges)
    }
}

impl<C, P> FoamLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    pub fn with_features(client: C, features: Arc<P>) -> Self {
        Self {
            _client: client,
            documents: DocumentStore::default(),
            features,
            folding_ranges: true,
        }
    }

    /// Advertise (and answer) textDocument/foldingRange only when enabled.
    pub fn with_folding_ranges(mut self, enabled: bool) -> Self {
        self.folding_ranges = enabled;
        self
    }

    async fn store(&self, uri: Url, text: String) {
        debug!(%uri, bytes = text.len(), "storing document snapshot");
        self.documents.upsert(uri, text).await;
    }

    async fn document(&self, uri: &Url) -> Option<Arc<TextDocument>> {
        self.documents.get(uri).await
    }
}

fn to_lsp_position(position: &AstPosition) -> Position {
    Position::new(position.line as u32, position.column as u32)
}

fn to_lsp_range(range: &AstRange) -> Range {
    Range {
        start: to_lsp_position(&range.start),
        end: to_lsp_position(&range.end),
    }
}

#[allow(deprecated)]
fn to_document_symbol(symbol: &FoamDocumentSymbol) -> DocumentSymbol {
    DocumentSymbol {
        name: symbol.name.clone(),
        detail: symbol.detail.clone(),
        kind: symbol.kind,
        deprecated: None,
        range: to_lsp_range(&symbol.range),
        selection_range: to_lsp_range(&symbol.selection_range),
        children: if symbol.children.is_empty() {
            None
        } else {
            Some(symbol.children.iter().map(to_document_symbol).collect())
        },
        tags: None,
    }
}

fn to_lsp_folding_range(range: &FoamFoldingRange) -> FoldingRange {
    FoldingRange {
        start_line: range.start_line,
        start_character: range.start_character,
        end_line: range.end_line,
        end_character: range.end_character,
        kind: range.kind.clone(),
        collapsed_text: None,
    }
}

#[async_trait]
impl<C, P> tower_lsp::LanguageServer for FoamLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            document_symbol_provider: Some(OneOf::Left(true)),
            folding_range_provider: self
                .folding_ranges
                .then_some(FoldingRangeProviderCapability::Simple(true)),
            ..ServerCapabilities::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: "foam-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {}

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: lsp_types::DidOpenTextDocumentParams) {
        let TextDocumentItem { uri, text, .. } = params.text_document;
        self.store(uri, text).await;
    }

    async fn did_change(&self, params: lsp_types::DidChangeTextDocumentParams) {
        if let Some(change) = params.content_changes.into_iter().last() {
            self.store(params.text_document.uri, change.text).await;
        }
    }

    async fn did_close(&self, params: lsp_types::DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri).await;
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        if let Some(document) = self.document(&params.text_document.uri).await {
            let symbols = self.features.document_symbols(&document);
            let converted: Vec<DocumentSymbol> = symbols.iter().map(to_document_symbol).collect();
            Ok(Some(DocumentSymbolResponse::Nested(converted)))
        } else {
            Ok(None)
        }
    }

    async fn folding_range(&self, params: FoldingRangeParams) -> Result<Option<Vec<FoldingRange>>> {
        if !self.folding_ranges {
            return Ok(None);
        }
        if let Some(document) = self.document(&params.text_document.uri).await {
            let ranges = self.features.folding_ranges(&document);
            Ok(Some(ranges.iter().map(to_lsp_folding_range).collect()))
        } else {
            Ok(None)
        }
    }
}
